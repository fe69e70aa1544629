//! Interactive prompt loop.
//!
//! A thin caller over the script runner: reads one line at a time from
//! stdin, dispatches the built-in commands, and treats anything else as an
//! SQL file name. Blocks on user input between runs; there is never more
//! than one script in flight.

use crate::db::DatabaseClient;
use crate::error::Result;
use crate::script::ScriptRunner;
use std::io::{self, BufRead, Write};

/// Scripts executed by the `load` command, in order.
const METADATA_SCRIPTS: [&str; 2] = ["table_metadata.sql", "relational_metadata.sql"];

/// File executed by the `join` command.
const JOIN_SCRIPT: &str = "join.sql";

/// The interactive application loop.
pub struct App {
    db: Box<dyn DatabaseClient>,
}

impl App {
    /// Creates the app over an established database connection.
    pub fn new(db: Box<dyn DatabaseClient>) -> Self {
        Self { db }
    }

    /// Runs the prompt loop until the user types `exit`.
    pub async fn run(&self) -> Result<()> {
        let stdin = io::stdin();
        let runner = ScriptRunner::new(self.db.as_ref());

        loop {
            print!(
                "Enter the SQL file name (or type 'exit' to quit, 'load' to load metadata, \
                 'join' to execute join.sql): "
            );
            io::stdout().flush().ok();

            let mut input = String::new();
            if stdin.lock().read_line(&mut input).unwrap_or(0) == 0 {
                // EOF on stdin ends the session like `exit`.
                break;
            }
            let input = input.trim();

            match input {
                "" => continue,
                "exit" => break,
                "load" => {
                    for script in METADATA_SCRIPTS {
                        runner.run_script(script).await;
                    }
                }
                "join" => {
                    runner.run_file(JOIN_SCRIPT).await;
                }
                filename => {
                    runner.run_file(filename).await;
                }
            }
        }

        self.db.close().await?;
        println!("Disconnected from PostgreSQL.");
        Ok(())
    }

    /// Runs one script through the batch path and disconnects (one-shot
    /// `--script` mode).
    pub async fn run_script_once(&self, path: &str) -> Result<()> {
        let runner = ScriptRunner::new(self.db.as_ref());
        runner.run_script(path).await;
        self.db.close().await?;
        Ok(())
    }
}
