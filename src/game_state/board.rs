//! Authoritative board state.
//!
//! `Board` owns both fixed-capacity rosters, the one-ply en-passant window and
//! the cached check holder. Occupancy is answered from the rosters; the square
//! grid is presentational only. Legality testing mutates the board through
//! trial moves that are always reverted with a `TrialToken`, so no caller ever
//! observes a half-applied trial.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{castle_destinations, CastlingRule, BACK_RANK_LAYOUT};
use crate::game_state::chess_types::*;
use crate::game_state::piece::Piece;
use crate::game_state::trial_state::TrialToken;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::moves::move_descriptions::{ChessMove, MoveClassification, MoveKind};

/// Square skipped by the most recent two-square pawn advance, and who may
/// capture onto it during the next ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnPassantTarget {
    pub capturer: Color,
    pub target: Position,
    pub victim: PieceHandle,
}

/// Read-only view of one roster entry for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceView {
    pub position: Position,
    pub kind: PieceKind,
    pub color: Color,
    pub captured: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub pieces: Vec<PieceView>,
    pub checked_king: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    // [rank][file]
    squares: [[SquareShade; 8]; 8],
    // [color][slot]
    rosters: [[Option<Piece>; ROSTER_CAPACITY]; 2],
    king_index: [Option<usize>; 2],
    in_check: Option<Color>,
    en_passant: Option<EnPassantTarget>,
    castling_rule: CastlingRule,
}

impl Default for Board {
    fn default() -> Self {
        Self::new_game()
    }
}

impl Board {
    /// Board with no pieces; positions are built with [`Board::place`].
    pub fn empty() -> Self {
        let mut squares = [[SquareShade::Dark; 8]; 8];
        for position in Position::all() {
            squares[position.rank() as usize][position.file() as usize] = SquareShade::of(position);
        }

        Self {
            squares,
            rosters: [[None; ROSTER_CAPACITY]; 2],
            king_index: [None; 2],
            in_check: None,
            en_passant: None,
            castling_rule: CastlingRule::default(),
        }
    }

    /// Standard starting layout.
    pub fn new_game() -> Self {
        let mut board = Self::empty();

        for color in [Color::White, Color::Black] {
            let roster = &mut board.rosters[color.index()];
            for (file, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
                let position = Position::at(file as u8, color.home_rank());
                roster[file] = Some(Piece::new(*kind, color, position));
                if *kind == PieceKind::King {
                    board.king_index[color.index()] = Some(file);
                }
            }
            for file in 0..8u8 {
                let position = Position::at(file, color.pawn_rank());
                roster[8 + file as usize] = Some(Piece::new(PieceKind::Pawn, color, position));
            }
        }

        board
    }

    pub fn with_castling_rule(mut self, rule: CastlingRule) -> Self {
        self.castling_rule = rule;
        self
    }

    /// Adds an unmoved piece in the first free roster slot of its color.
    pub fn place(
        &mut self,
        color: Color,
        kind: PieceKind,
        position: Position,
    ) -> Result<PieceHandle, ChessErrors> {
        if self.piece_at(position).is_some() {
            return Err(ChessErrors::SquareOccupied(position));
        }
        if kind == PieceKind::King && self.king_index[color.index()].is_some() {
            return Err(ChessErrors::DuplicateKing(color));
        }

        let slot = self.rosters[color.index()]
            .iter()
            .position(Option::is_none)
            .ok_or(ChessErrors::RosterFull(color))?;

        self.rosters[color.index()][slot] = Some(Piece::new(kind, color, position));
        if kind == PieceKind::King {
            self.king_index[color.index()] = Some(slot);
        }
        Ok(PieceHandle { color, slot })
    }

    #[inline]
    pub fn castling_rule(&self) -> CastlingRule {
        self.castling_rule
    }

    #[inline]
    pub fn square_shade(&self, position: Position) -> SquareShade {
        self.squares[position.rank() as usize][position.file() as usize]
    }

    /// Roster entry behind `handle`, captured or not.
    #[inline]
    pub fn piece(&self, handle: PieceHandle) -> Option<&Piece> {
        self.rosters[handle.color.index()]
            .get(handle.slot)
            .and_then(Option::as_ref)
    }

    #[inline]
    fn piece_mut(&mut self, handle: PieceHandle) -> Option<&mut Piece> {
        self.rosters[handle.color.index()]
            .get_mut(handle.slot)
            .and_then(Option::as_mut)
    }

    /// Active (non-captured) piece standing on `position`.
    pub fn piece_at(&self, position: Position) -> Option<(PieceHandle, &Piece)> {
        [Color::White, Color::Black]
            .into_iter()
            .flat_map(|color| self.active_pieces(color))
            .find(|(_, piece)| piece.position() == position)
    }

    /// Every non-captured piece of `color`, in roster order.
    pub fn active_pieces(&self, color: Color) -> impl Iterator<Item = (PieceHandle, &Piece)> + '_ {
        self.rosters[color.index()]
            .iter()
            .enumerate()
            .filter_map(move |(slot, entry)| match entry {
                Some(piece) if !piece.is_captured() => Some((PieceHandle { color, slot }, piece)),
                _ => None,
            })
    }

    pub fn active_handles(&self, color: Color) -> Vec<PieceHandle> {
        self.active_pieces(color).map(|(handle, _)| handle).collect()
    }

    #[inline]
    pub fn king_handle(&self, color: Color) -> Option<PieceHandle> {
        self.king_index[color.index()].map(|slot| PieceHandle { color, slot })
    }

    pub fn king_position(&self, color: Color) -> Option<Position> {
        self.king_handle(color)
            .and_then(|handle| self.piece(handle))
            .map(Piece::position)
    }

    /// Cached check holder, as of the last `refresh_check_state`.
    #[inline]
    pub fn in_check(&self) -> Option<Color> {
        self.in_check
    }

    /// Recomputes the cached check holder and returns it.
    pub fn refresh_check_state(&mut self) -> Option<Color> {
        let holder = [Color::White, Color::Black]
            .into_iter()
            .find(|color| is_in_check(self, *color));
        self.in_check = holder;
        holder
    }

    #[inline]
    pub fn en_passant(&self) -> Option<EnPassantTarget> {
        self.en_passant
    }

    #[inline]
    pub(crate) fn set_en_passant(&mut self, window: Option<EnPassantTarget>) {
        self.en_passant = window;
    }

    /// Applies `mv`, runs `probe` against the resulting position and reverts.
    ///
    /// The probe only gets a shared borrow, so it cannot disturb the trial.
    pub fn with_trial<R>(&mut self, mv: &ChessMove, probe: impl FnOnce(&Board) -> R) -> R {
        let token = self.apply_trial(mv);
        let result = probe(self);
        self.revert_trial(token);
        result
    }

    /// Applies a move without touching movement history, turn, en-passant
    /// window or check cache.
    pub(crate) fn apply_trial(&mut self, mv: &ChessMove) -> TrialToken {
        let mut token = TrialToken {
            mover: mv.piece,
            mover_from: mv.from,
            captured: None,
            partner: None,
        };

        match mv.kind {
            MoveKind::Castle { side, rook } => {
                let (king_to, rook_to) = castle_destinations(mv.piece.color, side);
                if let Some(rook_piece) = self.piece_mut(rook) {
                    token.partner = Some((rook, rook_piece.position()));
                    rook_piece.relocate(rook_to);
                }
                self.relocate(mv.piece, king_to);
            }
            _ => {
                if let Some(captured) = mv.captured_piece() {
                    self.set_captured(captured, true);
                    token.captured = Some(captured);
                }
                self.relocate(mv.piece, mv.to);
            }
        }

        token
    }

    pub(crate) fn revert_trial(&mut self, token: TrialToken) {
        self.relocate(token.mover, token.mover_from);
        if let Some((rook, rook_from)) = token.partner {
            self.relocate(rook, rook_from);
        }
        if let Some(captured) = token.captured {
            self.set_captured(captured, false);
        }
    }

    /// Applies a confirmed move: captures, castling relocation, promotion and
    /// movement history. Turn, en-passant window and check cache are the
    /// controller's to update afterwards.
    ///
    /// `mv` must come from the legal move set of the current position.
    pub fn commit_move(&mut self, mv: &ChessMove) -> MoveClassification {
        debug_assert!(
            {
                let mut probe = self.clone();
                crate::move_generation::legal_move_generator::legal_moves_for(&mut probe, mv.piece)
                    .contains(mv)
            },
            "committed move {mv} is not in the legal move set"
        );

        match mv.kind {
            MoveKind::Castle { side, rook } => {
                let (king_to, rook_to) = castle_destinations(mv.piece.color, side);
                self.confirm(mv.piece, king_to);
                self.confirm(rook, rook_to);
                MoveClassification::Castle
            }
            MoveKind::Capture { captured } | MoveKind::EnPassant { captured } => {
                self.set_captured(captured, true);
                self.confirm(mv.piece, mv.to);
                MoveClassification::Capture
            }
            MoveKind::Promotion {
                promote_to,
                captured,
            } => {
                if let Some(captured) = captured {
                    self.set_captured(captured, true);
                }
                self.confirm(mv.piece, mv.to);
                if let Some(pawn) = self.piece_mut(mv.piece) {
                    pawn.promote(promote_to);
                }
                MoveClassification::Promote
            }
            MoveKind::Normal | MoveKind::DoublePawnPush => {
                self.confirm(mv.piece, mv.to);
                MoveClassification::Move
            }
        }
    }

    /// Read-only view for rendering. Captured pieces are included and flagged.
    pub fn snapshot(&self) -> BoardSnapshot {
        let pieces = self
            .rosters
            .iter()
            .flat_map(|roster| roster.iter().flatten())
            .map(|piece| PieceView {
                position: piece.position(),
                kind: piece.kind,
                color: piece.color,
                captured: piece.is_captured(),
            })
            .collect();

        BoardSnapshot {
            pieces,
            checked_king: self.in_check.and_then(|color| self.king_position(color)),
        }
    }

    fn relocate(&mut self, handle: PieceHandle, to: Position) {
        if let Some(piece) = self.piece_mut(handle) {
            piece.relocate(to);
        }
    }

    fn confirm(&mut self, handle: PieceHandle, to: Position) {
        if let Some(piece) = self.piece_mut(handle) {
            piece.confirm_move(to);
        }
    }

    pub(crate) fn set_captured(&mut self, handle: PieceHandle, captured: bool) {
        if let Some(piece) = self.piece_mut(handle) {
            piece.set_captured(captured);
        }
    }
}
