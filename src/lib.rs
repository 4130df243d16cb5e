//! Wordle Game
//!
//! Terminal Wordle: guess a hidden five-letter word in six tries, with
//! per-letter colour feedback, a colour-coded keypad and pointer support.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{LetterFlag, Word, evaluate};
//!
//! let guess = Word::new("trace").unwrap();
//! let target = Word::new("crane").unwrap();
//!
//! let feedback = evaluate(&guess, &target);
//! assert_eq!(feedback.flags()[0], LetterFlag::Absent);
//! assert_eq!(feedback.to_string(), "-GGYG");
//! ```

// Core domain types and the guess evaluator
pub mod core;

// Error types shared across the game
pub mod error;

// Sessions, word sources, key tracking
pub mod game;

// Input events and the event bus
pub mod events;

// Screens, commands and the controller
pub mod control;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Runtime configuration
pub mod config;

// Tracing setup
pub mod logging;
