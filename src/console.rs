// src/console.rs

use crate::constants::CLEAR_CONFIRM_QUESTION;
use crate::errors::ChatResult;
use crate::message::{Message, Sender};
use crate::notification::Severity;
use crate::render::{ChatRenderer, SessionView};
use crate::session::ChatSession;
use chrono::{DateTime, Local};
use colored::{ColoredString, Colorize};
use log::info;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{sleep_until, Instant};

/// Line-oriented front end. Prints each message once, as it arrives.
pub struct ConsoleRenderer<W: Write> {
    out: W,
    shown: Vec<(u64, DateTime<Local>)>,
    was_typing: bool,
    last_notification: Option<u64>,
    last_status: Option<bool>,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            shown: Vec::new(),
            was_typing: false,
            last_notification: None,
            last_status: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn print_line(&mut self, line: &str) -> ChatResult<()> {
        writeln!(self.out, "{}", line)?;
        self.out.flush()?;
        Ok(())
    }

    fn is_prefix_of(&self, messages: &[Message]) -> bool {
        self.shown.len() <= messages.len()
            && self
                .shown
                .iter()
                .zip(messages)
                .all(|(&(id, ts), m)| id == m.id() && ts == m.timestamp())
    }

    fn write_message(&mut self, message: &Message) -> ChatResult<()> {
        let label: ColoredString = match message.sender() {
            Sender::User => message.sender().label().truecolor(255, 223, 128).bold(),
            Sender::Bot => message.sender().label().truecolor(144, 238, 144).bold(),
        };
        writeln!(
            self.out,
            "{} {}: {}",
            format!("[{}]", message.formatted_time()).as_str().dimmed(),
            label,
            message.text()
        )?;
        Ok(())
    }
}

impl<W: Write> ChatRenderer for ConsoleRenderer<W> {
    fn render(&mut self, view: &SessionView<'_>) -> ChatResult<()> {
        if self.last_status != Some(view.connected) {
            if self.last_status.is_some() {
                let status = if view.connected {
                    view.status_text().green()
                } else {
                    view.status_text().red()
                };
                writeln!(self.out, "{} {}", "status:".dimmed(), status)?;
            }
            self.last_status = Some(view.connected);
        }

        if !self.is_prefix_of(view.messages) {
            writeln!(self.out, "{}", "──── chat cleared ────".dimmed())?;
            self.shown.clear();
        }

        for message in &view.messages[self.shown.len()..] {
            self.write_message(message)?;
            self.shown.push((message.id(), message.timestamp()));
        }

        if view.typing && !self.was_typing {
            writeln!(self.out, "{}", "Bot is typing...".italic().dimmed())?;
        }
        self.was_typing = view.typing;

        if let Some(notification) = view.notification {
            if self.last_notification != Some(notification.id) {
                let tag = match notification.severity {
                    Severity::Info => "info".blue(),
                    Severity::Success => "ok".green(),
                    Severity::Warning => "warning".yellow(),
                    Severity::Error => "error".red(),
                };
                writeln!(self.out, "[{}] {}", tag, notification.message)?;
                self.last_notification = Some(notification.id);
            }
        }

        self.out.flush()?;
        Ok(())
    }
}

/// A console command, or plain text to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Send(String),
    Clear,
    History,
    Online,
    Offline,
    Help,
    Quit,
}

impl ConsoleCommand {
    pub fn parse(line: &str) -> ConsoleCommand {
        match line.trim() {
            "/clear" => ConsoleCommand::Clear,
            "/history" => ConsoleCommand::History,
            "/online" => ConsoleCommand::Online,
            "/offline" => ConsoleCommand::Offline,
            "/help" => ConsoleCommand::Help,
            "/quit" | "/exit" => ConsoleCommand::Quit,
            _ => ConsoleCommand::Send(line.to_string()),
        }
    }
}

const CONSOLE_HELP: &str =
    "Commands: /clear, /history, /online, /offline, /help, /quit. Anything else is sent to the bot.";

enum ConsoleEvent {
    Line(Option<String>),
    Wakeup,
}

pub async fn run_console(mut session: ChatSession) -> ChatResult<()> {
    let mut renderer = ConsoleRenderer::new(std::io::stdout());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    info!("console session started");
    renderer.print_line(&CONSOLE_HELP.dimmed().to_string())?;

    loop {
        let now = Instant::now();
        session.prune_notifications(now);
        renderer.render(&session.view(now))?;

        let wakeup = session.next_wakeup();
        let event = tokio::select! {
            line = lines.next_line() => ConsoleEvent::Line(line?),
            _ = sleep_until(wakeup.unwrap_or_else(Instant::now)), if wakeup.is_some() => ConsoleEvent::Wakeup,
        };

        let line = match event {
            ConsoleEvent::Wakeup => {
                session.complete_due_reply(Instant::now());
                continue;
            }
            ConsoleEvent::Line(Some(line)) => line,
            ConsoleEvent::Line(None) => {
                // stdin closed; deliver the reply still in flight before leaving
                if session.respond().await.is_some() {
                    renderer.render(&session.view(Instant::now()))?;
                }
                break;
            }
        };

        match ConsoleCommand::parse(&line) {
            ConsoleCommand::Send(text) => {
                if let Some(hint) = send_line(&mut session, &text) {
                    renderer.print_line(&hint.dimmed().to_string())?;
                }
            }
            ConsoleCommand::Clear => {
                renderer.print_line(&format!("{} [y/N]", CLEAR_CONFIRM_QUESTION))?;
                let answer = lines.next_line().await?.unwrap_or_default();
                let yes = is_affirmative(&answer);
                session.clear_chat(&mut |_: &str| yes);
            }
            ConsoleCommand::History => {
                let json = serde_json::to_string_pretty(&session.history())?;
                renderer.print_line(&json)?;
            }
            ConsoleCommand::Online => session.set_connected(true),
            ConsoleCommand::Offline => session.set_connected(false),
            ConsoleCommand::Help => renderer.print_line(CONSOLE_HELP)?,
            ConsoleCommand::Quit => break,
        }
    }

    info!("console session ended");
    Ok(())
}

const STILL_REPLYING: &str = "Bot is still replying, wait for the answer before sending again.";

/// Sends a typed line. Validation problems surface as toasts; a line turned
/// away only because a reply is in flight gets a hint instead of nothing.
fn send_line(session: &mut ChatSession, text: &str) -> Option<&'static str> {
    let toast_before = session.active_notification(Instant::now()).map(|n| n.id);
    if session.send_message(text) {
        return None;
    }
    let toast_after = session.active_notification(Instant::now()).map(|n| n.id);
    (session.is_typing() && toast_after == toast_before).then_some(STILL_REPLYING)
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
