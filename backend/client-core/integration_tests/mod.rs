// HTTP integration tests for the auth and mentorship clients.
// Each test stands up a wiremock server and points a client at it.

mod auth;
mod mentorship;
