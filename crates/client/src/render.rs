//! Battle output for the terminal.
use std::collections::HashMap;
use std::io::Write;

use anyhow::Result;
use echo_core::{BattleEngine, BattleOutcome, BattlePhase, CharacterView};
use echo_runtime::{Event, Topic};
use tokio::sync::broadcast::{Receiver, error::TryRecvError};

use crate::config::OutputFormat;

/// Writes battle progress in the configured [`OutputFormat`].
pub struct Renderer<W: Write> {
    out: W,
    format: OutputFormat,
    log_cursor: usize,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            log_cursor: 0,
        }
    }

    /// Prints everything that happened since the previous call.
    ///
    /// Text output follows the engine's battle log; JSON output writes one
    /// line per event.
    pub fn render(&mut self, engine: &BattleEngine, events: &[Event]) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                let fresh = engine.log().get(self.log_cursor..).unwrap_or(&[]);
                for line in fresh {
                    writeln!(self.out, "{line}")?;
                }
                self.log_cursor = engine.log().len();

                if engine.phase() == BattlePhase::PlayerTurn {
                    let snapshot = engine.snapshot();
                    writeln!(
                        self.out,
                        "  {} | {}",
                        status(&snapshot.player),
                        status(&snapshot.enemy)
                    )?;
                }
            }
            OutputFormat::Json => {
                for event in events {
                    serde_json::to_writer(&mut self.out, event)?;
                    writeln!(self.out)?;
                }
            }
        }
        self.out.flush()?;
        Ok(())
    }

    /// Prints the final result line in text mode.
    pub fn finish(&mut self, outcome: BattleOutcome) -> Result<()> {
        if self.format == OutputFormat::Text {
            match outcome {
                BattleOutcome::Victory {
                    exp_reward,
                    leveled_up,
                } => {
                    let level = if leveled_up { ", level up" } else { "" };
                    writeln!(self.out, "Result: victory (+{exp_reward} EXP{level})")?;
                }
                BattleOutcome::Defeat => writeln!(self.out, "Result: defeat")?,
            }
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn status(view: &CharacterView) -> String {
    format!(
        "{} HP {}/{} MP {}/{}",
        view.name, view.hp, view.max_hp, view.mp, view.max_mp
    )
}

/// Collects pending events from every receiver in publication order.
pub fn drain_events(receivers: &mut HashMap<Topic, Receiver<Event>>) -> Vec<Event> {
    let mut events = Vec::new();
    for (topic, rx) in receivers.iter_mut() {
        loop {
            match rx.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!("Dropped {} events on topic {:?}", skipped, topic);
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }
    }
    events.sort_by_key(|event| event.seq);
    events
}
