//! Animal chess game logic with an arena-based board representation.
//!
//! A two-player capture game on a 6x5 board. Captured pieces switch sides and
//! wait in the capturer's hand until they are dropped back onto an empty
//! cell; capturing the opposing lion wins the game outright.
//!
//! # Board Layout
//!
//! ```text
//! Cell indices (row-major order), Upper's back rank on row 0:
//!
//!    col:  0   1   2   3   4
//! row 0:   0   1   2   3   4    <- Upper back rank
//! row 1:   5   6   7   8   9
//! row 2:  10  11  12  13  14
//! row 3:  15  16  17  18  19
//! row 4:  20  21  22  23  24
//! row 5:  25  26  27  28  29    <- Lower back rank
//!
//! Upper pieces head toward row 5, Lower pieces toward row 0.
//! Promotion zone: rows {4, 5} for Upper, rows {0, 1} for Lower.
//! ```
//!
//! # State Representation
//!
//! Cells and pieces are index-linked arenas: a [`Cell`] stores an optional
//! [`PieceId`], a [`Piece`] stores its [`Location`] (a cell or a hand), and
//! [`Game`] owns the board, the pieces and both players. The winner is a
//! single latched field written at the lion-capture step, never re-derived.
//!
//! The engine validates and applies moves; it does not track whose turn it
//! is and does not stop mutation after a win. Callers check [`Game::winner`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of rows on the board.
pub const ROWS: u8 = 6;
/// Number of columns on the board.
pub const COLS: u8 = 5;
/// Total cell count (6 x 5).
pub const CELLS: usize = (ROWS as usize) * (COLS as usize);
/// Pieces each player starts with: 1 lion, 2 dogs, 2 cats, 3 chicks.
pub const PIECES_PER_SIDE: usize = 8;

/// Side identifier, fixing a player's forward direction and promotion rows.
///
/// Player 0 is always `Upper`, player 1 is always `Lower`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Side {
    Upper,
    Lower,
}

impl Side {
    /// Upper pieces promote on rows >= 4.
    const UPPER_PROMOTION_RANK: u8 = 4;
    /// Lower pieces promote on rows <= 1.
    const LOWER_PROMOTION_RANK: u8 = 1;

    /// Get the opposing side.
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Upper => Side::Lower,
            Side::Lower => Side::Upper,
        }
    }

    /// Player index for this side (Upper = 0, Lower = 1).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::Upper => 0,
            Side::Lower => 1,
        }
    }

    /// Convert from a player index (0 or 1) to a side.
    #[inline]
    pub fn from_index(idx: usize) -> Option<Side> {
        match idx {
            0 => Some(Side::Upper),
            1 => Some(Side::Lower),
            _ => None,
        }
    }

    /// Row delta of one step toward the opponent's back rank.
    #[inline]
    pub fn forward(self) -> i8 {
        match self {
            Side::Upper => 1,
            Side::Lower => -1,
        }
    }

    /// Check whether entering `row` puts a piece of this side in its
    /// promotion zone (the two rows nearest the opponent's back rank).
    #[inline]
    pub fn promotes_on(self, row: u8) -> bool {
        match self {
            Side::Upper => row >= Self::UPPER_PROMOTION_RANK,
            Side::Lower => row <= Self::LOWER_PROMOTION_RANK,
        }
    }
}

/// Movement kind of a piece. Immutable for the piece's whole life; promotion
/// swaps the movement rule, not the variant.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// Any of the 8 neighboring cells. Capturing it ends the game.
    Lion,
    /// Any neighbor except the two backward diagonals.
    Dog,
    /// Forward, forward diagonals and backward diagonals. Promotable.
    Cat,
    /// Forward only. Promotable.
    Chick,
}

impl Variant {
    /// Check if this variant carries a promotion flag (cat and chick only).
    #[inline]
    pub fn is_promotable(self) -> bool {
        matches!(self, Variant::Cat | Variant::Chick)
    }

    /// Get all variants as an iterator.
    pub fn all() -> impl Iterator<Item = Variant> {
        [Variant::Lion, Variant::Dog, Variant::Cat, Variant::Chick].into_iter()
    }
}

/// Position on the 6x5 board (0-29, row-major).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Pos(pub u8);

impl Pos {
    /// Create a position from row (0-5) and column (0-4).
    #[inline]
    pub fn from_row_col(row: u8, col: u8) -> Pos {
        debug_assert!(row < ROWS && col < COLS);
        Pos(row * COLS + col)
    }

    /// Bounds-checked constructor.
    #[inline]
    pub fn new(row: u8, col: u8) -> Option<Pos> {
        if row < ROWS && col < COLS {
            Some(Pos(row * COLS + col))
        } else {
            None
        }
    }

    /// Get the row (0-5).
    #[inline]
    pub fn row(self) -> u8 {
        self.0 / COLS
    }

    /// Get the column (0-4).
    #[inline]
    pub fn col(self) -> u8 {
        self.0 % COLS
    }

    /// Cell index for arena lookups.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Step by a row/column delta. Out-of-bounds steps return `None`; the
    /// board never wraps.
    #[inline]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Pos> {
        let row = self.row() as i8 + dr;
        let col = self.col() as i8 + dc;
        if (0..ROWS as i8).contains(&row) && (0..COLS as i8).contains(&col) {
            Some(Pos::from_row_col(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Iterate over all 30 positions.
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..CELLS as u8).map(Pos)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

/// Index into a game's piece arena.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct PieceId(pub u8);

impl PieceId {
    /// Arena index.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Where a piece currently is. Exactly one of the two, always.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Location {
    /// On the board, at this cell.
    Board(Pos),
    /// Off the board, in its owner's hand.
    Hand,
}

/// A piece: movement kind, current owner, promotion flag and location.
///
/// Pieces are created once at setup (or via [`Game::place`]) and never
/// destroyed; capture reassigns the owner and relocates the piece into the
/// capturer's hand.
#[derive(Clone, Debug)]
pub struct Piece {
    variant: Variant,
    owner: Side,
    promoted: bool,
    loc: Location,
}

impl Piece {
    /// Movement kind.
    #[inline]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Current owner. Reassigned on capture.
    #[inline]
    pub fn owner(&self) -> Side {
        self.owner
    }

    /// Promotion flag. Always false for lions and dogs.
    #[inline]
    pub fn is_promoted(&self) -> bool {
        self.promoted
    }

    /// Current location.
    #[inline]
    pub fn location(&self) -> Location {
        self.loc
    }

    /// Board position, or `None` while in a hand.
    #[inline]
    pub fn pos(&self) -> Option<Pos> {
        match self.loc {
            Location::Board(pos) => Some(pos),
            Location::Hand => None,
        }
    }

    /// Check if the piece is waiting in a hand.
    #[inline]
    pub fn is_in_hand(&self) -> bool {
        self.loc == Location::Hand
    }
}

/// One cell of the board: its position and the occupying piece, if any.
#[derive(Clone, Copy, Debug)]
pub struct Cell {
    pos: Pos,
    piece: Option<PieceId>,
}

impl Cell {
    /// Position of this cell.
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Occupying piece, if any.
    #[inline]
    pub fn piece(&self) -> Option<PieceId> {
        self.piece
    }

    /// Check if no piece is on this cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.piece.is_none()
    }
}

/// Validation mode, fixed at board construction.
///
/// On an `Unchecked` board, moves skip the legal-set membership check;
/// capture, relocation and promotion side effects still apply. Meant for
/// isolated exercises of the per-variant movement rules, not for real play.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mode {
    /// Moves must be members of the piece's legal-move set.
    Live,
    /// Moves relocate without the legality check.
    Unchecked,
}

/// The 6x5 grid. Placement and removal bookkeeping only; movement legality
/// lives in [`Game`] and [`filter_moves`].
#[derive(Clone, Debug)]
pub struct Board {
    mode: Mode,
    cells: Vec<Cell>,
}

impl Board {
    fn new(mode: Mode) -> Board {
        Board {
            mode,
            cells: Pos::all().map(|pos| Cell { pos, piece: None }).collect(),
        }
    }

    /// Validation mode of this board.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Get the cell at a position.
    #[inline]
    pub fn cell(&self, pos: Pos) -> &Cell {
        &self.cells[pos.index()]
    }

    /// Occupant of the cell at `pos`, if any.
    #[inline]
    pub fn piece_at(&self, pos: Pos) -> Option<PieceId> {
        self.cells[pos.index()].piece
    }

    fn attach(&mut self, pos: Pos, id: PieceId) {
        debug_assert!(self.cells[pos.index()].piece.is_none());
        self.cells[pos.index()].piece = Some(id);
    }

    fn detach(&mut self, pos: Pos) {
        self.cells[pos.index()].piece = None;
    }
}

/// Everything that can go wrong when mutating a game. All recoverable: the
/// game state is untouched whenever an error is returned.
#[derive(thiserror::Error, Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameError {
    /// Destination not in the piece's legal-move set, or the target cell is
    /// already taken (placement and drops).
    #[error("illegal move to {0}")]
    IllegalMove(Pos),
    /// Player lookup outside the two-player range.
    #[error("no player with index {0}")]
    InvalidPlayerIndex(usize),
    /// Drop attempted with a piece the player does not hold.
    #[error("piece is not in the player's hand")]
    PieceNotInHand,
}

/// A participant: display name, fixed side, hand of captured pieces and the
/// one-way victory latch.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    name: String,
    side: Side,
    hand: Vec<PieceId>,
    won: bool,
}

impl Player {
    /// Display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Side this player plays. Fixed at creation from the player index.
    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Captured pieces available to drop. Unordered.
    #[inline]
    pub fn hand(&self) -> &[PieceId] {
        &self.hand
    }

    /// Victory latch: set once when this player captures the lion, never
    /// cleared.
    #[inline]
    pub fn has_won(&self) -> bool {
        self.won
    }
}

/// Apply the per-variant movement rule to the base neighborhood scan.
///
/// `base` is the candidate set produced by the owner-aware 8-neighborhood
/// scan; the returned vector is the subset the variant may actually enter.
/// A promoted cat or chick moves by the dog rule.
pub fn filter_moves(
    variant: Variant,
    promoted: bool,
    origin: Pos,
    side: Side,
    base: &[Pos],
) -> Vec<Pos> {
    let effective = if promoted && variant.is_promotable() {
        Variant::Dog
    } else {
        variant
    };
    let fwd = side.forward();

    match effective {
        Variant::Lion => base.to_vec(),
        Variant::Dog => {
            // the two backward diagonals are off limits
            let banned = [origin.offset(-fwd, -1), origin.offset(-fwd, 1)];
            base.iter()
                .copied()
                .filter(|&p| !banned.contains(&Some(p)))
                .collect()
        }
        Variant::Cat => {
            // straight back and both side cells are off limits
            let banned = [
                origin.offset(-fwd, 0),
                origin.offset(0, -1),
                origin.offset(0, 1),
            ];
            base.iter()
                .copied()
                .filter(|&p| !banned.contains(&Some(p)))
                .collect()
        }
        Variant::Chick => {
            let forward = origin.offset(fwd, 0);
            base.iter()
                .copied()
                .filter(|&p| Some(p) == forward)
                .collect()
        }
    }
}

/// Fixed starting layout: (variant, side, row, col). Upper holds rows 0 and
/// 2, Lower mirrors on rows 5 and 3.
const STARTING_LAYOUT: &[(Variant, Side, u8, u8)] = &[
    (Variant::Cat, Side::Upper, 0, 0),
    (Variant::Dog, Side::Upper, 0, 1),
    (Variant::Lion, Side::Upper, 0, 2),
    (Variant::Dog, Side::Upper, 0, 3),
    (Variant::Cat, Side::Upper, 0, 4),
    (Variant::Chick, Side::Upper, 2, 1),
    (Variant::Chick, Side::Upper, 2, 2),
    (Variant::Chick, Side::Upper, 2, 3),
    (Variant::Cat, Side::Lower, 5, 0),
    (Variant::Dog, Side::Lower, 5, 1),
    (Variant::Lion, Side::Lower, 5, 2),
    (Variant::Dog, Side::Lower, 5, 3),
    (Variant::Cat, Side::Lower, 5, 4),
    (Variant::Chick, Side::Lower, 3, 1),
    (Variant::Chick, Side::Lower, 3, 2),
    (Variant::Chick, Side::Lower, 3, 3),
];

/// A full game: board, piece arena and both players.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    pieces: Vec<Piece>,
    players: [Player; 2],
    winner: Option<Side>,
}

impl Game {
    /// Create a game with the standard starting layout on a [`Mode::Live`]
    /// board.
    pub fn new(name_a: &str, name_b: &str) -> Game {
        let mut game = Game::bare(name_a, name_b, Mode::Live);
        for &(variant, side, row, col) in STARTING_LAYOUT {
            game.place(variant, side, Pos::from_row_col(row, col))
                .expect("starting cells are distinct");
        }
        game
    }

    /// Create an empty game on a [`Mode::Unchecked`] board. Pieces are added
    /// with [`Game::place`] and may then be relocated without legality
    /// checks, which makes isolated movement-rule tests possible.
    pub fn unchecked(name_a: &str, name_b: &str) -> Game {
        Game::bare(name_a, name_b, Mode::Unchecked)
    }

    fn bare(name_a: &str, name_b: &str, mode: Mode) -> Game {
        Game {
            board: Board::new(mode),
            pieces: Vec::with_capacity(2 * PIECES_PER_SIDE),
            players: [
                Player {
                    name: name_a.to_string(),
                    side: Side::Upper,
                    hand: Vec::new(),
                    won: false,
                },
                Player {
                    name: name_b.to_string(),
                    side: Side::Lower,
                    hand: Vec::new(),
                    won: false,
                },
            ],
            winner: None,
        }
    }

    // ========== Lookups ==========

    /// The board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cell at (row, col), or `None` out of bounds.
    #[inline]
    pub fn square(&self, row: u8, col: u8) -> Option<&Cell> {
        Pos::new(row, col).map(|pos| self.board.cell(pos))
    }

    /// Player by index: 0 is Upper, 1 is Lower.
    pub fn player(&self, index: usize) -> Result<&Player, GameError> {
        self.players
            .get(index)
            .ok_or(GameError::InvalidPlayerIndex(index))
    }

    /// The winner, if the game has one. Latched when a lion is captured; a
    /// later lion capture (the engine keeps accepting moves) does not
    /// overwrite it.
    #[inline]
    pub fn winner(&self) -> Option<&Player> {
        self.winner.map(|side| &self.players[side.index()])
    }

    /// Piece by id.
    #[inline]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.index()]
    }

    /// Iterate over every piece in the game with its id.
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces
            .iter()
            .enumerate()
            .map(|(i, piece)| (PieceId(i as u8), piece))
    }

    /// Hand of the given side.
    #[inline]
    pub fn hand(&self, side: Side) -> &[PieceId] {
        &self.players[side.index()].hand
    }

    // ========== Placement ==========

    /// Create a new piece on an empty cell. Placing onto a taken cell is
    /// rejected with [`GameError::IllegalMove`].
    pub fn place(&mut self, variant: Variant, side: Side, pos: Pos) -> Result<PieceId, GameError> {
        if self.board.piece_at(pos).is_some() {
            return Err(GameError::IllegalMove(pos));
        }
        let id = PieceId(self.pieces.len() as u8);
        self.pieces.push(Piece {
            variant,
            owner: side,
            promoted: false,
            loc: Location::Board(pos),
        });
        self.board.attach(pos, id);
        Ok(id)
    }

    // ========== Legality ==========

    /// Legal destinations for a piece: the bounded 8-neighborhood of its
    /// cell, minus cells held by the same owner, narrowed by the variant's
    /// movement rule (promotion-aware). Empty for a piece in hand.
    ///
    /// Opponent-held destinations stay in the set; entering one is a
    /// capture.
    pub fn legal_moves(&self, id: PieceId) -> Vec<Pos> {
        let piece = &self.pieces[id.index()];
        let origin = match piece.loc {
            Location::Board(pos) => pos,
            Location::Hand => return Vec::new(),
        };
        let base = self.base_candidates(origin, piece.owner);
        filter_moves(piece.variant, piece.promoted, origin, piece.owner, &base)
    }

    /// The variant-independent scan: in-bounds neighbors of `origin` not
    /// occupied by `owner`'s own pieces.
    fn base_candidates(&self, origin: Pos, owner: Side) -> Vec<Pos> {
        let mut out = Vec::with_capacity(8);
        for dr in -1i8..=1 {
            for dc in -1i8..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let Some(pos) = origin.offset(dr, dc) else {
                    continue;
                };
                if let Some(occ) = self.board.piece_at(pos) {
                    if self.pieces[occ.index()].owner == owner {
                        continue;
                    }
                }
                out.push(pos);
            }
        }
        out
    }

    // ========== Move / Capture / Drop ==========

    /// Move a piece to `to`, capturing any opponent piece there and applying
    /// promotion. On a [`Mode::Live`] board the destination must be in the
    /// piece's legal-move set; on [`Mode::Unchecked`] the piece relocates
    /// freely, refusing only a cell held by its own side.
    ///
    /// All checks run before the first state change: on `Err` nothing moved.
    pub fn move_piece(&mut self, id: PieceId, to: Pos) -> Result<(), GameError> {
        let piece = &self.pieces[id.index()];
        let owner = piece.owner;
        let from = match piece.loc {
            Location::Board(pos) => pos,
            Location::Hand => return Err(GameError::IllegalMove(to)),
        };

        match self.board.mode() {
            Mode::Live => {
                if !self.legal_moves(id).contains(&to) {
                    return Err(GameError::IllegalMove(to));
                }
            }
            Mode::Unchecked => {
                if let Some(occ) = self.board.piece_at(to) {
                    if self.pieces[occ.index()].owner == owner {
                        return Err(GameError::IllegalMove(to));
                    }
                }
            }
        }

        // own-held cells were rejected above, so any occupant is a capture
        if let Some(occ) = self.board.piece_at(to) {
            self.capture(occ, owner);
        }

        self.board.detach(from);
        self.board.attach(to, id);
        self.pieces[id.index()].loc = Location::Board(to);

        self.maybe_promote(id, to);
        Ok(())
    }

    /// Drop a piece from `side`'s hand onto an empty cell. The piece comes
    /// back unpromoted (capture already demoted it).
    pub fn drop_piece(&mut self, side: Side, id: PieceId, to: Pos) -> Result<(), GameError> {
        let Some(at) = self.players[side.index()]
            .hand
            .iter()
            .position(|&held| held == id)
        else {
            return Err(GameError::PieceNotInHand);
        };
        if self.board.piece_at(to).is_some() {
            return Err(GameError::IllegalMove(to));
        }

        self.players[side.index()].hand.swap_remove(at);
        self.board.attach(to, id);
        let piece = &mut self.pieces[id.index()];
        debug_assert!(!piece.promoted, "hand pieces are always unpromoted");
        piece.loc = Location::Board(to);
        log::debug!("{:?} dropped a {:?} on {}", side, piece.variant, to);
        Ok(())
    }

    /// The single capture path, shared by every variant. Demotes first, then
    /// transfers ownership and relocates into the capturer's hand. A lion
    /// additionally latches the capturer's victory, the sole win condition,
    /// while still traveling the uniform hand path so ownership and location
    /// invariants hold for all 16 pieces.
    fn capture(&mut self, id: PieceId, capturer: Side) {
        let piece = &mut self.pieces[id.index()];
        // demotion happens before the ownership transfer
        piece.promoted = false;
        let variant = piece.variant;
        piece.owner = capturer;
        if let Location::Board(pos) = piece.loc {
            self.board.detach(pos);
        }
        piece.loc = Location::Hand;
        self.players[capturer.index()].hand.push(id);
        log::debug!("{:?} captured a {:?}", capturer, variant);

        if variant == Variant::Lion {
            self.players[capturer.index()].won = true;
            if self.winner.is_none() {
                self.winner = Some(capturer);
            }
            log::debug!("{:?} wins by lion capture", capturer);
        }
    }

    /// Promote an unpromoted cat or chick entering its side's promotion
    /// zone. Fires only on moves, never on drops.
    fn maybe_promote(&mut self, id: PieceId, to: Pos) {
        let piece = &mut self.pieces[id.index()];
        if !piece.variant.is_promotable() || piece.promoted {
            return;
        }
        if piece.owner.promotes_on(to.row()) {
            piece.promoted = true;
            log::debug!("{:?} {:?} promoted entering {}", piece.owner, piece.variant, to);
        }
    }

    // ========== State Export ==========

    /// Serializable view of the full game state.
    pub fn snapshot(&self) -> Snapshot {
        let cells = Pos::all()
            .map(|pos| self.board.piece_at(pos).map(|id| self.piece_snapshot(id)))
            .collect();
        let hands = [
            self.players[0]
                .hand
                .iter()
                .map(|&id| self.piece_snapshot(id))
                .collect(),
            self.players[1]
                .hand
                .iter()
                .map(|&id| self.piece_snapshot(id))
                .collect(),
        ];
        Snapshot {
            cells,
            hands,
            winner: self.winner,
        }
    }

    fn piece_snapshot(&self, id: PieceId) -> PieceSnapshot {
        let piece = &self.pieces[id.index()];
        PieceSnapshot {
            variant: piece.variant,
            owner: piece.owner,
            promoted: piece.promoted,
        }
    }
}

impl fmt::Display for Game {
    /// Compact board diagram: one letter per piece (uppercase for Upper),
    /// `+` marks promotion, `.` an empty cell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            for col in 0..COLS {
                let pos = Pos::from_row_col(row, col);
                match self.board.piece_at(pos) {
                    Some(id) => {
                        let piece = &self.pieces[id.index()];
                        let glyph = match piece.variant {
                            Variant::Lion => 'l',
                            Variant::Dog => 'd',
                            Variant::Cat => 'c',
                            Variant::Chick => 'h',
                        };
                        let glyph = if piece.owner == Side::Upper {
                            glyph.to_ascii_uppercase()
                        } else {
                            glyph
                        };
                        let mark = if piece.promoted { '+' } else { ' ' };
                        write!(f, "{}{} ", mark, glyph)?;
                    }
                    None => write!(f, " . ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A piece as seen by a front-end: kind, owner, promotion.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PieceSnapshot {
    pub variant: Variant,
    pub owner: Side,
    pub promoted: bool,
}

/// Read-only, serializable game state: 30 row-major cells, both hands and
/// the winner.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub cells: Vec<Option<PieceSnapshot>>,
    pub hands: [Vec<PieceSnapshot>; 2],
    pub winner: Option<Side>,
}
