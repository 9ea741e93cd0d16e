use crate::render::{self, RenderOptions};
use crate::settings::Settings;
use crate::theme::Theme;
use anyhow::{Context, Result};
use crossterm::{
    queue,
    style::{Print, ResetColor, SetForegroundColor},
};
use sopa_core::{parse_puzzles, parse_wordlist, write_puzzles, Generator, Puzzle, Solver, Word};
use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Result of handling a menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Continue,
    Quit,
}

/// Entries of the interactive menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Generate,
    GenerateMany,
    Solve,
    ToggleHighlight,
    Quit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Generate),
            "2" => Some(Self::GenerateMany),
            "3" => Some(Self::Solve),
            "4" => Some(Self::ToggleHighlight),
            "5" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// The main application state
pub struct App {
    pub settings: Settings,
    pub theme: Theme,
    generator: Generator,
    solver: Solver,
    /// Where the highlight toggle persists settings; `None` keeps them in memory
    settings_path: Option<PathBuf>,
}

impl App {
    pub fn new(settings: Settings, seed: u64, settings_path: Option<PathBuf>) -> Self {
        let generator = Generator::with_config_and_seed(settings.planner_config(), seed);
        Self {
            theme: Theme::from_name(settings.theme),
            settings,
            generator,
            solver: Solver::new(),
            settings_path,
        }
    }

    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            highlight: self.settings.highlight,
        }
    }

    /// Generate `count` puzzles from `words`, printing each one
    pub fn generate<W: Write>(
        &mut self,
        words: &[Word],
        count: usize,
        out: &mut W,
    ) -> Result<Vec<Puzzle>> {
        let mut puzzles = Vec::with_capacity(count);
        for _ in 0..count {
            let generated = self.generator.generate(words)?;
            render::render_grid(
                out,
                &generated.puzzle.grid,
                Some(&generated.placements),
                self.render_options(),
                &self.theme,
            )?;
            puzzles.push(generated.puzzle);
        }
        info!(count, words = words.len(), "generated puzzles");
        Ok(puzzles)
    }

    /// Append puzzles to `path` in the puzzle file format
    pub fn save_puzzles(&self, path: &Path, puzzles: &[Puzzle]) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening {}", path.display()))?;
        file.write_all(write_puzzles(puzzles).as_bytes())
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Solve every puzzle in a file, printing each grid and the words not found
    pub fn solve_file<W: Write>(&self, path: &Path, out: &mut W) -> Result<usize> {
        let text =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let puzzles =
            parse_puzzles(&text).with_context(|| format!("parsing {}", path.display()))?;

        let mut missing = 0;
        for puzzle in &puzzles {
            let solution = self.solver.solve(&puzzle.grid, &puzzle.words);
            render::render_grid(
                out,
                &puzzle.grid,
                Some(&solution.placements()),
                self.render_options(),
                &self.theme,
            )?;
            render::render_solution_report(out, &solution, &self.theme)?;
            missing += solution.missing().count();
        }
        info!(puzzles = puzzles.len(), missing, "solved puzzle file");
        Ok(missing)
    }

    /// Run the interactive menu until the user quits or input ends
    pub fn run_menu<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<()> {
        loop {
            self.render_menu(out)?;
            let Some(line) = prompt(input, out, ">>> ")? else {
                break;
            };
            let action = match MenuChoice::parse(&line) {
                Some(choice) => self.handle_choice(choice, input, out)?,
                None => {
                    render::render_error(out, &self.theme, "Invalid option")?;
                    AppAction::Continue
                }
            };
            if action == AppAction::Quit {
                break;
            }
        }
        Ok(())
    }

    fn render_menu<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let entries = [
            ("1", "Generate a word search".to_string()),
            ("2", "Generate N word searches".to_string()),
            ("3", "Solve word searches from a file".to_string()),
            (
                "4",
                format!(
                    "Toggle highlight mode (highlight={})",
                    self.settings.highlight
                ),
            ),
            ("5", "Quit".to_string()),
        ];
        writeln!(out)?;
        queue!(
            out,
            SetForegroundColor(self.theme.prompt),
            Print("Choose an option:\n"),
            ResetColor
        )?;
        for (key, label) in entries {
            queue!(
                out,
                SetForegroundColor(self.theme.key),
                Print(format!("{key}) ")),
                ResetColor,
                Print(label),
                Print("\n")
            )?;
        }
        out.flush()
    }

    fn handle_choice<R: BufRead, W: Write>(
        &mut self,
        choice: MenuChoice,
        input: &mut R,
        out: &mut W,
    ) -> Result<AppAction> {
        match choice {
            MenuChoice::Generate => {
                let Some(words) = self.read_wordlist(input, out)? else {
                    return Ok(AppAction::Quit);
                };
                self.generate_or_report(&words, 1, out)?;
            }
            MenuChoice::GenerateMany => {
                let Some(line) = prompt(input, out, "N: ")? else {
                    return Ok(AppAction::Quit);
                };
                let count: usize = match line.trim().parse() {
                    Ok(count) => count,
                    Err(_) => {
                        render::render_error(out, &self.theme, "Not a number")?;
                        return Ok(AppAction::Continue);
                    }
                };
                let Some(words) = self.read_wordlist(input, out)? else {
                    return Ok(AppAction::Quit);
                };
                self.generate_or_report(&words, count, out)?;
            }
            MenuChoice::Solve => {
                render::render_message(
                    out,
                    &self.theme,
                    "Records start with '# INICIO', end with '# FIN', and list the words on their last line.",
                )?;
                let Some(name) = prompt(input, out, "File name: ")? else {
                    return Ok(AppAction::Quit);
                };
                let path = PathBuf::from(name.trim());
                if !path.exists() {
                    render::render_error(out, &self.theme, "File does not exist")?;
                } else if let Err(e) = self.solve_file(&path, out) {
                    render::render_error(out, &self.theme, &format!("{e:#}"))?;
                }
            }
            MenuChoice::ToggleHighlight => {
                self.settings.highlight = !self.settings.highlight;
                let state = if self.settings.highlight { "on" } else { "off" };
                render::render_message(out, &self.theme, &format!("Highlight mode {state}"))?;
                if let Some(path) = &self.settings_path {
                    if let Err(e) = self.settings.save(path) {
                        render::render_error(
                            out,
                            &self.theme,
                            &format!("Failed to save settings: {e:#}"),
                        )?;
                    }
                }
            }
            MenuChoice::Quit => return Ok(AppAction::Quit),
        }
        Ok(AppAction::Continue)
    }

    fn generate_or_report<W: Write>(
        &mut self,
        words: &[Word],
        count: usize,
        out: &mut W,
    ) -> Result<()> {
        if let Err(e) = self.generate(words, count, out) {
            render::render_error(out, &self.theme, &format!("{e:#}"))?;
        }
        Ok(())
    }

    /// Ask for words until the list is valid; `None` when input ends
    fn read_wordlist<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        out: &mut W,
    ) -> Result<Option<Vec<Word>>> {
        loop {
            let Some(line) = prompt(input, out, "Enter words separated by spaces: ")? else {
                return Ok(None);
            };
            match parse_wordlist(&line) {
                Ok(words) => return Ok(Some(words)),
                Err(_) => render::render_error(out, &self.theme, "Invalid input")?,
            }
        }
    }
}

/// Print `text` and read one line; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> io::Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
