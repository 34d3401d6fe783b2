use crate::command::{Command, CommandInner};
use crate::model::Model;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

/// A headless harness that drives a [`Model`] without a terminal.
///
/// Immediate messages produced by commands are queued and flushed with
/// [`drain_messages`](TestProgram::drain_messages). Subscriptions are never
/// started, so tests inject time themselves, usually by sending a tick
/// message carrying a chosen [`Instant`](std::time::Instant).
///
/// ```rust,ignore
/// let mut prog = TestProgram::<App>::new(());
/// prog.send(AppMsg::Bouquets(control::Message::Activate));
/// prog.drain_messages();
/// assert!(prog.model().bouquets.is_open());
/// assert!(prog.render_string(40, 10).contains("Playlist 1"));
/// ```
pub struct TestProgram<M: Model> {
    model: M,
    pending: Vec<M::Message>,
    quit_requested: bool,
}

impl<M: Model> TestProgram<M> {
    /// Create a test program by calling [`Model::init`] with `flags`.
    pub fn new(flags: M::Flags) -> Self {
        let (model, init_cmd) = M::init(flags);
        let mut program = Self {
            model,
            pending: Vec::new(),
            quit_requested: false,
        };
        program.collect(init_cmd);
        program
    }

    /// Send a message, running a single update.
    pub fn send(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.collect(cmd);
    }

    /// Process queued messages until no new ones are produced.
    pub fn drain_messages(&mut self) {
        while !self.pending.is_empty() {
            let messages: Vec<_> = self.pending.drain(..).collect();
            for msg in messages {
                let cmd = self.model.update(msg);
                self.collect(cmd);
            }
        }
    }

    /// Send a message and drain everything it triggers.
    pub fn dispatch(&mut self, msg: M::Message) {
        self.send(msg);
        self.drain_messages();
    }

    /// Whether any processed command asked to quit.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Shared reference to the model for assertions.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Mutable reference to the model for arranging state directly.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Render the model to a [`Buffer`] of the given size.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let backend = ratatui::backend::TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("test backend never fails");
        terminal
            .draw(|frame| self.model.view(frame))
            .expect("test backend never fails");
        terminal.backend().buffer().clone()
    }

    /// Render and return the visible symbols, one line per row.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        buffer_to_string(&self.render(width, height))
    }

    fn collect(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Message(msg) => self.pending.push(msg),
            CommandInner::Quit => self.quit_requested = true,
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.collect(cmd);
                }
            }
        }
    }
}

/// Flatten a buffer's symbols into a string, rows separated by newlines.
pub fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area;
    let mut output = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            output.push_str(buf[(x, y)].symbol());
        }
        if y + 1 < area.bottom() {
            output.push('\n');
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    struct Log {
        steps: Vec<String>,
    }

    #[derive(Debug)]
    enum LogMsg {
        Start,
        Step(String),
        Stop,
    }

    impl Model for Log {
        type Message = LogMsg;
        type Flags = ();

        fn init(_: ()) -> (Self, Command<LogMsg>) {
            (
                Log { steps: vec![] },
                Command::message(LogMsg::Step("init".into())),
            )
        }

        fn update(&mut self, msg: LogMsg) -> Command<LogMsg> {
            match msg {
                LogMsg::Start => {
                    self.steps.push("started".into());
                    Command::batch([
                        Command::message(LogMsg::Step("auto".into())),
                        Command::message(LogMsg::Step("batched".into())),
                    ])
                }
                LogMsg::Step(s) => {
                    self.steps.push(s);
                    Command::none()
                }
                LogMsg::Stop => Command::quit(),
            }
        }

        fn view(&self, frame: &mut ratatui::Frame) {
            frame.render_widget(Paragraph::new(self.steps.join(",")), frame.area());
        }
    }

    #[test]
    fn init_messages_are_queued() {
        let mut prog = TestProgram::<Log>::new(());
        assert!(prog.model().steps.is_empty());
        prog.drain_messages();
        assert_eq!(prog.model().steps, vec!["init"]);
    }

    #[test]
    fn dispatch_chains_batched_messages() {
        let mut prog = TestProgram::<Log>::new(());
        prog.drain_messages();
        prog.dispatch(LogMsg::Start);
        assert_eq!(prog.model().steps, vec!["init", "started", "auto", "batched"]);
        assert!(!prog.quit_requested());
        prog.send(LogMsg::Stop);
        assert!(prog.quit_requested());
    }

    #[test]
    fn render_string_rows() {
        let mut prog = TestProgram::<Log>::new(());
        prog.drain_messages();
        let out = prog.render_string(6, 2);
        assert_eq!(out, "init  \n      ");
    }
}
