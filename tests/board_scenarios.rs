mod common;

use common::{advance, BoardBuilder};
use tribes_data::{Grid, SimulationState, Tribe};

#[tokio::test]
async fn test_isolated_cell_dies_and_everyone_loses() {
    let mut board = BoardBuilder::new()
        .with_size(5, 5)
        .with_cell(2, 2, Tribe::Warriors)
        .build();

    let states = advance(&mut board, 1).await;

    assert!(board.front().is_empty_of_life());
    assert_eq!(states, vec![SimulationState::EveryoneLost]);
}

#[tokio::test]
async fn test_block_is_stable_and_victorious() {
    let rows = ["......", "......", "..AA..", "..AA..", "......", "......"];
    let mut board = BoardBuilder::new().with_sigils(&rows).build();
    let block = Grid::from_sigils(&rows).unwrap();

    let states = advance(&mut board, 1).await;
    assert_eq!(states, vec![SimulationState::TribeVictorious(Tribe::Vikings)]);
    assert_eq!(board.front(), &block);

    // Keep driving past the verdict; the block never changes.
    for _ in 0..4 {
        let state = board.next_state(|_, _| {}).await.unwrap();
        assert_eq!(board.front(), &block);
        assert!(state.is_terminal());
    }
}

#[tokio::test]
async fn test_zero_fill_is_empty_and_lost() {
    let mut board = BoardBuilder::new()
        .with_size(12, 20)
        .with_config(|c| c.fill = 0.0)
        .build();

    assert!(board.front().is_empty_of_life());
    assert_eq!(advance(&mut board, 1).await, vec![SimulationState::EveryoneLost]);
}

#[tokio::test]
async fn test_full_fill_single_cluster_is_all_vikings() {
    let board = BoardBuilder::new()
        .with_size(6, 9)
        .with_config(|c| {
            c.fill = 1.0;
            c.clusters = 1;
        })
        .build();

    assert!(board.front().cells().iter().all(|&t| t == Tribe::Vikings));
    assert_eq!(board.front().population(), [54, 0, 0]);
}

#[tokio::test]
async fn test_full_fill_three_clusters_uses_every_cell() {
    let board = BoardBuilder::new()
        .with_size(15, 30)
        .with_config(|c| c.fill = 1.0)
        .build();

    let population = board.front().population();
    assert_eq!(population.iter().sum::<usize>(), 15 * 30);
    assert!(population.iter().all(|&n| n > 0), "{population:?}");
}

#[tokio::test]
async fn test_generation_counter_and_render_order() {
    let mut board = BoardBuilder::new().with_seed(9).build();
    let mut seen = Vec::new();
    for _ in 0..4 {
        board
            .next_state(|grid, generation| seen.push((generation, grid.population())))
            .await
            .unwrap();
    }
    assert_eq!(
        seen.iter().map(|(g, _)| *g).collect::<Vec<_>>(),
        vec![1, 2, 3, 4]
    );
    assert_eq!(board.generation(), 4);
}

#[tokio::test]
async fn test_metrics_follow_generations() {
    let mut board = BoardBuilder::new().build();
    advance(&mut board, 3).await;
    // One eager computation at construction plus one per completed background task.
    assert!(board.metrics().generations() >= 3);
}

#[tokio::test]
async fn test_display_delay_holds_each_generation() {
    let mut board = BoardBuilder::new()
        .with_sigils(&["....", ".BB.", ".BB.", "...."])
        .with_config(|c| c.delay_ms = 30)
        .build();

    let started = std::time::Instant::now();
    advance(&mut board, 2).await;
    assert!(started.elapsed() >= std::time::Duration::from_millis(60));
}
