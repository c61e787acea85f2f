// Public API tests for the Asaas client against a wiremock server.
// Each test owns its MockServer, so tests run in parallel without ports or
// shared state.

mod customers;
mod errors;
mod helpers;
mod payments;
mod subscriptions;
