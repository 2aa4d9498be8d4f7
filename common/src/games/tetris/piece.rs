use crate::games::session_rng::SessionRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Spawn orientation. Cell values carry the kind's color index so the
    /// board keeps the piece's color after locking.
    #[rustfmt::skip]
    pub fn spawn_matrix(&self) -> Vec<Vec<u8>> {
        match self {
            PieceKind::I => vec![
                vec![0, 0, 0, 0],
                vec![1, 1, 1, 1],
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 0],
            ],
            PieceKind::J => vec![
                vec![2, 0, 0],
                vec![2, 2, 2],
                vec![0, 0, 0],
            ],
            PieceKind::L => vec![
                vec![0, 0, 3],
                vec![3, 3, 3],
                vec![0, 0, 0],
            ],
            PieceKind::O => vec![
                vec![0, 4, 4],
                vec![0, 4, 4],
                vec![0, 0, 0],
            ],
            PieceKind::S => vec![
                vec![0, 5, 5],
                vec![5, 5, 0],
                vec![0, 0, 0],
            ],
            PieceKind::T => vec![
                vec![0, 6, 0],
                vec![6, 6, 6],
                vec![0, 0, 0],
            ],
            PieceKind::Z => vec![
                vec![7, 7, 0],
                vec![0, 7, 7],
                vec![0, 0, 0],
            ],
        }
    }
}

/// A falling tetromino: its current rotation matrix and board offset. The
/// offset is signed because rotations near the top may place occupied cells
/// above row zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub matrix: Vec<Vec<u8>>,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// Spawns the piece horizontally centered at the top row.
    pub fn spawn(kind: PieceKind, board_width: usize) -> Self {
        let matrix = kind.spawn_matrix();
        let x = board_width as i32 / 2 - matrix[0].len() as i32 / 2;
        Self { matrix, x, y: 0 }
    }

    pub fn random(rng: &mut SessionRng, board_width: usize) -> Self {
        let kind = PieceKind::ALL[rng.random_range(0..PieceKind::ALL.len())];
        Self::spawn(kind, board_width)
    }

    /// Clockwise rotation: columns of the current matrix, read bottom-up,
    /// become the rows of the result.
    pub fn rotated_matrix(&self) -> Vec<Vec<u8>> {
        let rows = self.matrix.len();
        let cols = self.matrix[0].len();
        (0..cols)
            .map(|x| (0..rows).rev().map(|y| self.matrix[y][x]).collect())
            .collect()
    }

    /// Occupied cells in board coordinates with their color values.
    pub fn occupied_cells(&self) -> Vec<(i32, i32, u8)> {
        let mut cells = Vec::new();
        for (dy, row) in self.matrix.iter().enumerate() {
            for (dx, &value) in row.iter().enumerate() {
                if value != 0 {
                    cells.push((self.x + dx as i32, self.y + dy as i32, value));
                }
            }
        }
        cells
    }
}
