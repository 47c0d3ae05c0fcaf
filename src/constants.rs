// src/constants.rs
//
// Application-wide constants. Each constant is documented with its purpose
// and usage context.

/// Minimum number of characters a note title must have before it is submitted.
///
/// Used in: `domain/validation.rs`
pub const MIN_TITLE_LENGTH: usize = 3;

/// Minimum number of characters a note body must have before it is submitted.
///
/// Used in: `domain/validation.rs`
pub const MIN_BODY_LENGTH: usize = 10;

/// Base URL of the public notes API, including the version prefix.
///
/// Overridden by `[api] base_url` in the config file or by `--base-url`.
///
/// Used in: `infrastructure/config.rs`
pub const DEFAULT_BASE_URL: &str = "https://notes-api.dicoding.dev/v2";

/// Delay in milliseconds after spawning the browser before returning.
///
/// The rendered page lives in a temporary directory owned by the renderer.
/// The browser needs a moment to read it before the process exits and the
/// directory is removed.
///
/// Used in: `infrastructure/renderer.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 500;
