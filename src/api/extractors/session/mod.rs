/*!
 * Authenticated session extractor
 *
 * Public API:
 * - Session (FromRequestParts 実装込み)
 */

mod core;
mod types;

pub use types::Session;
