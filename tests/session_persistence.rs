mod common;

use common::BoardBuilder;
use tribes_io::{IoError, SessionRecord, SessionStore};
use tribes_lib::app::{GameControl, GameOutcome, Session};
use tribes_lib::ui::HeadlessRenderer;
use uuid::Uuid;

fn temp_store() -> SessionStore {
    SessionStore::new(std::env::temp_dir().join(format!("tribes_it_{}", Uuid::new_v4())))
}

#[tokio::test]
async fn test_finished_session_reopens_at_same_generation() {
    let store = temp_store();
    let config = BoardBuilder::new()
        .with_size(8, 8)
        .with_seed(5)
        .with_config(|c| c.fill = 0.1)
        .config()
        .clone();

    let control = GameControl::new();
    let mut session = Session::new(config, control).unwrap();
    let outcome = session
        .game_mut()
        .run(&mut HeadlessRenderer::new(10))
        .await
        .unwrap();
    assert!(!matches!(outcome, GameOutcome::Interrupted { .. }));
    session.save(&store).await.unwrap();

    let reopened = Session::open(&store, session.id(), GameControl::new()).unwrap();
    assert_eq!(
        reopened.game().board().generation(),
        session.game().board().generation()
    );
    assert_eq!(reopened.game().board().memo(), session.game().board().memo());

    let listed = store.list().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, session.id());

    std::fs::remove_dir_all(store.dir()).ok();
}

#[tokio::test]
async fn test_record_for_other_id_is_rejected() {
    let store = temp_store();
    let mut board = BoardBuilder::new().build();
    let record = SessionRecord::new(Uuid::new_v4(), board.snapshot().await.unwrap());
    store.save(&record).unwrap();

    let misplaced = store.dir().join(format!("{}.json", Uuid::nil()));
    std::fs::write(&misplaced, serde_json::to_string(&record).unwrap()).unwrap();

    assert!(matches!(store.load(Uuid::nil()), Err(IoError::Validation(_))));

    std::fs::remove_dir_all(store.dir()).ok();
}
