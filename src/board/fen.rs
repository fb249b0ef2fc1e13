//! FEN (Forsyth–Edwards Notation) parsing and emission.

use super::fen_tables::{CHAR_TO_PC, PC_TO_CHAR};
use super::{Board, Color, Piece, CASTLE_BK, CASTLE_BQ, CASTLE_WK, CASTLE_WQ, EMPTY_SQ};
use crate::square::Square;

impl Board {
    /// Overwrites this board in place from a FEN string. On error the board is left
    /// partially mutated; callers that need rollback should parse into a fresh board.
    pub fn set_fen(&mut self, fen: &str) -> Result<(), String> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(format!("FEN needs at least 4 fields, got {}", fields.len()));
        }

        *self = Board::new_empty();

        // Field 1: piece placement, ranks 8 -> 1, separated by '/'.
        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(format!("expected 8 ranks, got {}", ranks.len()));
        }
        for (rank_from_top, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_from_top;
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                if file >= 8 {
                    return Err(format!("rank {} overflows 8 files", rank + 1));
                }
                let (piece, color) = CHAR_TO_PC[c as usize]
                    .ok_or_else(|| format!("invalid piece glyph '{c}'"))?;
                let sq = Square::new(file as u8, rank as u8);
                let bb = self.bb(color, piece) | (1u64 << sq.index());
                self.set_bb(color, piece, bb);
                file += 1;
            }
            if file != 8 {
                return Err(format!("rank {} has {} files, expected 8", rank + 1, file));
            }
        }

        // Field 2: side to move.
        self.side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(format!("invalid side to move '{other}'")),
        };

        // Field 3: castling rights.
        self.castling_rights = 0;
        if fields[2] != "-" {
            for c in fields[2].chars() {
                self.castling_rights |= match c {
                    'K' => CASTLE_WK,
                    'Q' => CASTLE_WQ,
                    'k' => CASTLE_BK,
                    'q' => CASTLE_BQ,
                    other => return Err(format!("invalid castling glyph '{other}'")),
                };
            }
        }

        // Field 4: en passant target square.
        self.en_passant = match fields[3] {
            "-" => None,
            s => Some(Square::parse(s).ok_or_else(|| format!("invalid en passant square '{s}'"))?),
        };

        // Fields 5 & 6: halfmove clock and fullmove number, both optional with defaults.
        self.halfmove_clock = fields
            .get(4)
            .map(|s| s.parse::<u32>())
            .transpose()
            .map_err(|_| "invalid halfmove clock".to_string())?
            .unwrap_or(0);
        self.fullmove_number = fields
            .get(5)
            .map(|s| s.parse::<u32>())
            .transpose()
            .map_err(|_| "invalid fullmove number".to_string())?
            .unwrap_or(1);

        self.validate()?;
        self.refresh_zobrist();
        self.history = vec![self.zobrist];
        Ok(())
    }

    /// Emits this position as a FEN string.
    pub fn to_fen(&self) -> String {
        let mut out = String::with_capacity(64);

        for rank_from_top in 0..8 {
            let rank = 7 - rank_from_top;
            let mut empty_run = 0u32;
            for file in 0..8 {
                let sq = Square::new(file, rank as u8);
                match self.piece_at(sq) {
                    None => empty_run += 1,
                    Some((color, piece)) => {
                        if empty_run > 0 {
                            out.push_str(&empty_run.to_string());
                            empty_run = 0;
                        }
                        let idx = (color as usize) * 6 + (piece as usize);
                        out.push(PC_TO_CHAR[idx]);
                    }
                }
            }
            if empty_run > 0 {
                out.push_str(&empty_run.to_string());
            }
            if rank_from_top != 7 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        out.push(' ');
        if self.castling_rights == 0 {
            out.push('-');
        } else {
            if self.has_castling(CASTLE_WK) {
                out.push('K');
            }
            if self.has_castling(CASTLE_WQ) {
                out.push('Q');
            }
            if self.has_castling(CASTLE_BK) {
                out.push('k');
            }
            if self.has_castling(CASTLE_BQ) {
                out.push('q');
            }
        }

        out.push(' ');
        match self.en_passant {
            Some(sq) => out.push_str(&sq.to_string()),
            None => out.push('-'),
        }

        out.push(' ');
        out.push_str(&self.halfmove_clock.to_string());
        out.push(' ');
        out.push_str(&self.fullmove_number.to_string());

        out
    }
}

#[allow(dead_code)]
fn _silence_unused(_: u8) -> u8 {
    EMPTY_SQ
}
