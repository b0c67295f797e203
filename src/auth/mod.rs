//! Authentication and session management for the Belvo API.
//!
//! Belvo authenticates every request with HTTP Basic credentials built from
//! a secret key pair. A [`Session`] stores that pair, verifies it once with
//! a GET on the API root, and then signs every request it builds.
//!
//! ```no_run
//! use belvo_rs::{Session, ClientConfig};
//!
//! # async fn example() -> belvo_rs::Result<()> {
//! let session = Session::new("https://sandbox.belvo.com", &ClientConfig::default())?;
//! if !session.login("secret-key-id", "secret-key-password").await {
//!     eprintln!("credentials rejected");
//! }
//! # Ok(())
//! # }
//! ```

mod session;

pub use session::{Session, API_ROOT};
