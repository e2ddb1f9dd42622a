//! In-memory scripted engine.
//!
//! Without a script, a reveal opens just the requested cell and a flag
//! toggles it, which is enough engine for most dispatcher tests.

#![allow(dead_code)]

use async_trait::async_trait;
use minesweeper_client::board::{Cell, CellState, Position};
use minesweeper_client::engine::{
    EngineError, FlagResult, GameEngine, OpenResult, TimeEvent, WinHistory,
};
use minesweeper_client::lifecycle::GameState;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::{mpsc, Notify};

pub enum Scripted<T> {
    Reply(T),
    Fail,
}

#[derive(Default)]
struct Script {
    layouts: VecDeque<Scripted<Vec<Position>>>,
    reveals: VecDeque<Scripted<OpenResult>>,
    flags: VecDeque<Scripted<FlagResult>>,
    history: Option<Scripted<WinHistory>>,
    resumes: VecDeque<Scripted<()>>,
    ticks: Option<mpsc::Receiver<TimeEvent>>,
}

pub struct MockEngine {
    width: u8,
    height: u8,
    script: Mutex<Script>,
    calls: Mutex<Vec<String>>,
    /// When set, reveals wait for a notification before answering.
    hold: Mutex<Option<Arc<Notify>>>,
}

impl MockEngine {
    pub fn new(width: u8, height: u8) -> Arc<Self> {
        Arc::new(Self {
            width,
            height,
            script: Mutex::new(Script::default()),
            calls: Mutex::new(Vec::new()),
            hold: Mutex::new(None),
        })
    }

    pub fn layout(&self) -> Vec<Position> {
        super::layout(self.width, self.height)
    }

    pub fn script_layout(&self, reply: Scripted<Vec<Position>>) {
        self.script.lock().layouts.push_back(reply);
    }

    pub fn script_reveal(&self, reply: Scripted<OpenResult>) {
        self.script.lock().reveals.push_back(reply);
    }

    pub fn script_flag(&self, reply: Scripted<FlagResult>) {
        self.script.lock().flags.push_back(reply);
    }

    pub fn script_history(&self, reply: Scripted<WinHistory>) {
        self.script.lock().history = Some(reply);
    }

    pub fn script_resume(&self, reply: Scripted<()>) {
        self.script.lock().resumes.push_back(reply);
    }

    pub fn script_ticks(&self, ticks: mpsc::Receiver<TimeEvent>) {
        self.script.lock().ticks = Some(ticks);
    }

    /// Make reveals block until the returned handle is notified.
    pub fn hold_reveals(&self) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        *self.hold.lock() = Some(Arc::clone(&notify));
        notify
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn count(&self, call: &str) -> usize {
        self.calls.lock().iter().filter(|c| c.as_str() == call).count()
    }

    fn record(&self, call: &str) {
        self.calls.lock().push(call.to_string());
    }
}

fn failure() -> EngineError {
    EngineError::Unavailable("scripted failure".to_string())
}

#[async_trait]
impl GameEngine for MockEngine {
    async fn new_game(&self) -> Result<Vec<Position>, EngineError> {
        self.record("new_game");
        let scripted = self.script.lock().layouts.pop_front();
        match scripted {
            Some(Scripted::Reply(layout)) => Ok(layout),
            Some(Scripted::Fail) => Err(failure()),
            None => Ok(self.layout()),
        }
    }

    async fn reveal(&self, position: Position) -> Result<OpenResult, EngineError> {
        self.record("reveal");
        let hold = self.hold.lock().clone();
        if let Some(hold) = hold {
            hold.notified().await;
        }
        let scripted = self.script.lock().reveals.pop_front();
        match scripted {
            Some(Scripted::Reply(result)) => Ok(result),
            Some(Scripted::Fail) => Err(failure()),
            None => Ok(OpenResult {
                opened_cells: vec![position.with_cell(Cell::open(1))],
                game_state: GameState::Active,
                total_mines: 1,
            }),
        }
    }

    async fn toggle_flag(&self, position: Position) -> Result<FlagResult, EngineError> {
        self.record("flag");
        let scripted = self.script.lock().flags.pop_front();
        match scripted {
            Some(Scripted::Reply(result)) => Ok(result),
            Some(Scripted::Fail) => Err(failure()),
            None => {
                let cell = match position.cell.state {
                    CellState::Closed { flagged } => Cell {
                        state: CellState::Closed { flagged: !flagged },
                        ..position.cell
                    },
                    CellState::Open | CellState::ExposedMine => return Ok(FlagResult::default()),
                };
                Ok(FlagResult {
                    position: Some(position.with_cell(cell)),
                })
            }
        }
    }

    async fn win_history(&self) -> Result<WinHistory, EngineError> {
        self.record("win_history");
        let scripted = self.script.lock().history.take();
        match scripted {
            Some(Scripted::Reply(history)) => Ok(history),
            Some(Scripted::Fail) => Err(failure()),
            None => Ok(WinHistory::default()),
        }
    }

    async fn pause_timer(&self) -> Result<(), EngineError> {
        self.record("pause");
        Ok(())
    }

    async fn resume_timer(&self) -> Result<(), EngineError> {
        self.record("resume");
        let scripted = self.script.lock().resumes.pop_front();
        match scripted {
            Some(Scripted::Fail) => Err(failure()),
            Some(Scripted::Reply(())) | None => Ok(()),
        }
    }

    async fn duration_events(&self) -> Result<mpsc::Receiver<TimeEvent>, EngineError> {
        self.record("events");
        self.script.lock().ticks.take().ok_or_else(failure)
    }
}
