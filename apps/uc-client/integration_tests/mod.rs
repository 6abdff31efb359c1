// End-to-end command flow tests: login then mentor discovery against a
// mock API server, with a real file-backed session store.

mod commands;
