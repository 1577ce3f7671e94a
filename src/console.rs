use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::{Arc, atomic::{AtomicBool, Ordering}};

use log::*;

use crate::diary::MoodDiary;
use crate::eval::{classification_report, IMAGES};
use crate::senti::Classifier;
use crate::tracker::{Analysis, MoodTracker};
use crate::Error;

const HELP: &str = "Type how you are feeling and press enter.\n\
    /diary  show this session's mood diary\n\
    /eval   show the model evaluation\n\
    /help   show this message\n\
    /quit   end the session";

#[derive(Debug, PartialEq)]
pub enum Command {
    Diary,
    Eval,
    Help,
    Quit,
    Unknown(String),
}

#[derive(Debug, PartialEq)]
pub enum Line<'a> {
    Command(Command),
    Text(&'a str),
}

pub fn parse_line(line: &str) -> Line<'_> {
    let line = line.trim_end_matches(|c| c == '\n' || c == '\r');
    match line.trim() {
        "/diary" => Line::Command(Command::Diary),
        "/eval" => Line::Command(Command::Eval),
        "/help" => Line::Command(Command::Help),
        "/quit" | "/stop" => Line::Command(Command::Quit),
        n if n.starts_with('/') => Line::Command(Command::Unknown(n.to_string())),
        _ => Line::Text(line),
    }
}

#[derive(Debug, PartialEq)]
pub enum Feedback {
    Helpful,
    NotHelpful,
}

pub fn parse_feedback(answer: &str) -> Option<Feedback> {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(Feedback::Helpful),
        "n" | "no" => Some(Feedback::NotHelpful),
        _ => None,
    }
}

/// Line oriented front end over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            Ok(None)
        } else {
            Ok(Some(line))
        }
    }

    pub fn show_analysis(&mut self, analysis: &Analysis) -> io::Result<()> {
        writeln!(self.output, "\nAnalysis Results")?;
        writeln!(
            self.output,
            "Detected Mood: {} ({} confidence)",
            analysis.mood, analysis.confidence
        )?;
        writeln!(self.output, "Suggested Quote: {}", analysis.quote)
    }

    pub fn ask_feedback(&mut self) -> io::Result<Option<Feedback>> {
        let answer = self.read_line("Was this helpful? [y/n] ")?;
        let feedback = answer.as_deref().and_then(parse_feedback);
        match feedback {
            Some(Feedback::Helpful) => writeln!(self.output, "Thanks for your feedback!")?,
            Some(Feedback::NotHelpful) => writeln!(self.output, "We'll try to improve it!")?,
            None => {}
        }
        Ok(feedback)
    }

    pub fn show_diary(&mut self, diary: &MoodDiary) -> io::Result<()> {
        writeln!(self.output, "\nMood Diary")?;
        if diary.is_empty() {
            return writeln!(self.output, "Nothing yet.");
        }
        for (idx, entry) in diary.recent() {
            writeln!(
                self.output,
                "{}. \"{}\" \u{2192} {} ({} confidence)",
                idx,
                entry.text(),
                entry.mood(),
                entry.confidence()
            )?;
        }
        Ok(())
    }

    pub fn show_evaluations(&mut self, asset_dir: &Path) -> io::Result<()> {
        writeln!(self.output, "\nEvaluations")?;
        for image in IMAGES.iter() {
            let path = image.path(asset_dir);
            let missing = if path.exists() { "" } else { " (missing)" };
            writeln!(self.output, "\n{}", image.title)?;
            writeln!(self.output, "  {}{}", path.display(), missing)?;
            writeln!(self.output, "  {}", image.caption)?;
        }
        writeln!(self.output, "\nClassification Report")?;
        write!(self.output, "{}", classification_report())
    }
}

/// Settings the session loop needs from the config.
pub struct SessionOptions<'a> {
    pub show_diary: bool,
    pub asset_dir: &'a Path,
}

/// Runs until `/quit`, end of input, or `keep_running` goes false.
pub fn run_session<C, R, W>(
    tracker: &mut MoodTracker<C>,
    console: &mut Console<R, W>,
    options: &SessionOptions<'_>,
    keep_running: &Arc<AtomicBool>,
) -> Result<(), Error>
where
    C: Classifier,
    R: BufRead,
    W: Write,
{
    debug!("Starting session");
    while keep_running.load(Ordering::Relaxed) {
        let line = match console.read_line("You: ")? {
            Some(line) => line,
            None => break,
        };
        if !keep_running.load(Ordering::Relaxed) {
            break;
        }

        match parse_line(&line) {
            Line::Command(Command::Quit) => break,
            Line::Command(Command::Diary) => console.show_diary(tracker.diary())?,
            Line::Command(Command::Eval) => console.show_evaluations(options.asset_dir)?,
            Line::Command(Command::Help) => writeln!(console.output, "{}", HELP)?,
            Line::Command(Command::Unknown(n)) => {
                debug!("Got unknown command {}", n);
            }
            Line::Text(text) => match tracker.analyse(text) {
                Ok(Some(analysis)) => {
                    console.show_analysis(&analysis)?;
                    console.ask_feedback()?;
                    if options.show_diary {
                        console.show_diary(tracker.diary())?;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    error!("Could not read your mood: {}", e);
                }
            },
        }
    }
    info!("Session over after {} entries", tracker.diary().len());
    Ok(())
}
