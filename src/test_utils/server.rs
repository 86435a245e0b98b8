use std::sync::Arc;

use axum_test::TestServer;

use crate::{AppState, build_router, stores::JsonFileStore, test_utils::TempDataPath};

/// Create app state backed by a fresh JSON document.
///
/// Keep the returned [TempDataPath] alive for as long as the state is used.
pub(crate) fn get_test_state() -> (AppState, TempDataPath) {
    let data_path = TempDataPath::new();
    let store = JsonFileStore::open(data_path.path()).expect("could not open test store");

    (AppState::new(Arc::new(store)), data_path)
}

pub(crate) fn get_test_server() -> (TestServer, AppState, TempDataPath) {
    let (state, data_path) = get_test_state();
    let server = TestServer::new(build_router(state.clone()));

    (server, state, data_path)
}
