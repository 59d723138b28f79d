//! # BlitzSeller - Gamified Sales Dashboard
//!
//! BlitzSeller is the console edition of the BRIDGE Solutions sales dashboard.
//! It turns the daily routine of a field seller into a game: quests with XP and
//! coin rewards, achievements, a rewards store and a leaderboard, next to a
//! small CRM, a literature inventory and an analytics overview.
//!
//! ## Features
//!
//! - **Session**: Login and registration fabricate a local user record that is persisted in a `sled` slot and restored on the next start.
//! - **Route Guard**: Every page except the entry page requires a signed-in user.
//! - **Gamification**: Quest board, achievement panel, rewards store, leaderboard, rejection practice and a sales technique library.
//! - **CRM**: Lead search, stage filter, golden clients and pipeline aggregates.
//! - **Inventory**: Stock adjustments, low-stock detection and stock valuation.
//! - **Analytics**: Monthly sales, weekly activity, pipeline funnel and XP performance series.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use blitzseller::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml").await?;
//!     blitzseller::console::run(&config).await
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`auth`] - Session store, entry form and route guard
//! - [`gamification`] - Quests, achievements, store, leaderboard, practice, techniques
//! - [`crm`] - Lead book
//! - [`inventory`] - Literature stock
//! - [`analytics`] - Static series and derived figures
//! - [`settings`] - Segment preferences
//! - [`console`] - Interactive command loop
//! - [`storage`] - Key-value slot behind the session
//! - [`config`] - Configuration management

pub mod analytics;
pub mod auth;
pub mod config;
pub mod console;
pub mod crm;
pub mod errors;
pub mod gamification;
pub mod inventory;
pub mod logutil;
pub mod seed;
pub mod settings;
pub mod storage;
pub mod types;
