use tribes_core::{Board, BoardConfig};
use tribes_data::{Grid, Tribe};

/// Builds boards for integration tests: no display delay, fixed seed,
/// and optionally a hand-placed population instead of a clustered one.
#[allow(dead_code)]
pub struct BoardBuilder {
    config: BoardConfig,
    cells: Vec<(usize, usize, Tribe)>,
    sigils: Option<Vec<String>>,
}

#[allow(dead_code)]
impl BoardBuilder {
    pub fn new() -> Self {
        Self {
            config: BoardConfig {
                rows: 10,
                cols: 10,
                delay_ms: 0,
                seed: Some(42),
                ..BoardConfig::default()
            },
            cells: Vec::new(),
            sigils: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn with_size(mut self, rows: usize, cols: usize) -> Self {
        self.config.rows = rows;
        self.config.cols = cols;
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut BoardConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_cell(mut self, row: usize, col: usize, tribe: Tribe) -> Self {
        self.cells.push((row, col, tribe));
        self
    }

    /// Rows of `A`/`B`/`C`/`.`; the board takes its size from them.
    pub fn with_sigils(mut self, rows: &[&str]) -> Self {
        self.sigils = Some(rows.iter().map(|r| r.to_string()).collect());
        self
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Board with the hand-placed population, or a clustered one if nothing was placed.
    pub fn build(self) -> Board {
        if let Some(rows) = &self.sigils {
            let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
            let grid = Grid::from_sigils(&rows).expect("sigil rows must be rectangular");
            return Board::with_grid(self.config, grid).expect("valid board");
        }
        if self.cells.is_empty() {
            return Board::create(self.config).expect("valid board");
        }
        let mut grid = Grid::new(self.config.rows, self.config.cols);
        for (row, col, tribe) in self.cells {
            grid.set(row, col, tribe);
        }
        Board::with_grid(self.config, grid).expect("valid board")
    }
}

/// Advances `board` `n` times and returns every classification.
#[allow(dead_code)]
pub async fn advance(board: &mut Board, n: usize) -> Vec<tribes_data::SimulationState> {
    let mut states = Vec::with_capacity(n);
    for _ in 0..n {
        states.push(board.next_state(|_, _| {}).await.expect("generation"));
    }
    states
}
