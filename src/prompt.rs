//! Interactive album entry
//!
//! Reads songs one field at a time until a blank title. Durations are checked
//! as they are typed and asked for again until they parse, so every line
//! handed to the writer is already valid.

use crate::duration::is_parsable_duration;
use std::io::{self, BufRead, Write};

/// Where the builder is in the current song
#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    AwaitingTitle,
    AwaitingArtist { title: String },
    AwaitingDuration { title: String, artist: String },
    Done,
}

/// Prompts for songs on `output` and reads answers from `input`
pub struct AlbumPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> AlbumPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Collect tab-joined `title\tartist\tduration` lines
    ///
    /// A blank title or end of input finishes the album. A song cut off by
    /// end of input is dropped.
    pub fn collect_songs(&mut self) -> io::Result<Vec<String>> {
        writeln!(self.output, "Enter song information. Leave the title empty to finish.")?;
        writeln!(self.output, "Durations must use mm:ss or hh:mm:ss format.")?;

        let mut lines = Vec::new();
        let mut state = State::AwaitingTitle;

        loop {
            state = match state {
                State::AwaitingTitle => {
                    let track = lines.len() + 1;
                    self.ask(&format!("Title for track {} (blank to finish): ", track))?;
                    match self.read_answer()? {
                        Some(title) if !title.is_empty() => State::AwaitingArtist { title },
                        _ => State::Done,
                    }
                }
                State::AwaitingArtist { title } => {
                    self.ask("Artist: ")?;
                    match self.read_answer()? {
                        Some(artist) => State::AwaitingDuration { title, artist },
                        None => {
                            log::warn!("Input ended before artist of {:?}", title);
                            State::Done
                        }
                    }
                }
                State::AwaitingDuration { title, artist } => {
                    self.ask("Duration (mm:ss or hh:mm:ss): ")?;
                    match self.read_answer()? {
                        Some(duration) if is_parsable_duration(&duration) => {
                            lines.push(format!("{}\t{}\t{}", title, artist, duration));
                            State::AwaitingTitle
                        }
                        Some(duration) => {
                            log::warn!("Rejected duration {:?}", duration);
                            writeln!(
                                self.output,
                                "Invalid duration. Please enter the value again."
                            )?;
                            State::AwaitingDuration { title, artist }
                        }
                        None => {
                            log::warn!("Input ended before duration of {:?}", title);
                            State::Done
                        }
                    }
                }
                State::Done => break,
            };
        }

        Ok(lines)
    }

    fn ask(&mut self, prompt: &str) -> io::Result<()> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()
    }

    /// Next trimmed line, `None` at end of input
    fn read_answer(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        // Tabs would split the record, line breaks would split the file
        let answer = buf
            .trim()
            .chars()
            .map(|c| if matches!(c, '\t' | '\r' | '\n') { ' ' } else { c })
            .collect();
        Ok(Some(answer))
    }
}
