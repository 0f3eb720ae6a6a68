// ABOUTME: Line-oriented prompting over async stdin for the interactive menus
// ABOUTME: End of input is reported as None so menus can exit cleanly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io::Write;

use recipe_assistant::errors::AppResult;
use tokio::io::{self, AsyncBufReadExt, BufReader, Lines, Stdin};

/// Reads answers from stdin one line at a time
pub struct Prompt {
    lines: Lines<BufReader<Stdin>>,
}

impl Prompt {
    /// Prompt reading from the process stdin
    pub fn stdin() -> Self {
        Self {
            lines: BufReader::new(io::stdin()).lines(),
        }
    }

    /// Print `label` without a newline and read one line
    ///
    /// The trailing line ending is removed; other whitespace is kept.
    /// Returns `None` once stdin is closed.
    pub async fn ask(&mut self, label: &str) -> AppResult<Option<String>> {
        print!("{label}");
        std::io::stdout().flush()?;

        Ok(self
            .lines
            .next_line()
            .await?
            .map(|line| line.trim_end_matches('\r').to_owned()))
    }

    /// Wait for the user to press Enter
    pub async fn pause(&mut self, label: &str) -> AppResult<()> {
        self.ask(label).await?;
        Ok(())
    }
}
