//! Console session: a two-item menu driving the full library algorithm.

use std::{
    fmt,
    io::{self, BufRead, Write},
};

use rand::rngs::StdRng;

use crate::{
    config::Config,
    edition::{Edition, PrintEdition, Printable},
    error::LibraryError,
    generator::EditionGenerator,
    library::Library,
    observers::{NoticeBoard, PrintLogger, TakeLogger},
    persistence,
};

/// What a menu item does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Leave the session
    Exit,
    /// Build, print, take, snapshot and summarise a library
    RunAlgorithm,
}

/// One entry of the console menu
#[derive(Debug)]
pub struct MenuItem {
    /// Text the user types to pick this item
    pub input: &'static str,
    /// Shown after "Enter ... to"
    pub description: &'static str,
    /// Action performed when picked
    pub action: MenuAction,
}

/// The console menu, in display order
pub static MENU: [MenuItem; 2] = [
    MenuItem { input: "0", description: "exit the program", action: MenuAction::Exit },
    MenuItem {
        input: "1",
        description: "run the whole algorithm",
        action: MenuAction::RunAlgorithm,
    },
];

/// An interactive session reading commands from `input` and writing to `output`
pub struct Session<R, W> {
    /// Source of user input
    input: R,
    /// Destination of the dialogue
    output: W,
    /// Run settings
    config: Config,
    /// Random editions and letters
    generator: EditionGenerator<StdRng>,
    /// Notices posted by observers, flushed to `output`
    notices: NoticeBoard,
    /// Library produced by the last completed run
    library: Option<Library<PrintEdition>>,
    /// Set once the user picks the exit item
    canceled: bool,
}

// Manual implementation of Debug for Session
impl<R, W> fmt::Debug for Session<R, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .field("pending_notices", &self.notices.len())
            .field("library_len", &self.library.as_ref().map(Library::len))
            .field("canceled", &self.canceled)
            .finish_non_exhaustive()
    }
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session; a configured seed makes the run reproducible
    pub fn new(input: R, output: W, config: Config) -> Self {
        let generator =
            config.seed.map_or_else(EditionGenerator::from_os_rng, EditionGenerator::seeded);

        Self {
            input,
            output,
            config,
            generator,
            notices: NoticeBoard::new(),
            library: None,
            canceled: false,
        }
    }

    /// End the session, keeping the library of the last completed run
    #[must_use]
    pub fn into_library(self) -> Option<Library<PrintEdition>> {
        self.library
    }

    /// Show the menu and process commands until exit or end of input
    ///
    /// Failures of the algorithm itself are reported on `output` and the menu
    /// continues.
    ///
    /// # Errors
    ///
    /// Returns a `LibraryError::Io` if reading input or writing output fails.
    pub fn run(&mut self) -> Result<(), LibraryError> {
        while !self.canceled {
            self.show_menu()?;
            let Some(line) = self.read_line()? else {
                tracing::debug!("input closed, leaving session");
                break;
            };
            self.process_menu(line.trim())?;
        }
        Ok(())
    }

    /// Print every menu item
    fn show_menu(&mut self) -> io::Result<()> {
        for item in &MENU {
            writeln!(self.output, "Enter \"{}\" to {}", item.input, item.description)?;
        }
        Ok(())
    }

    /// Dispatch one line of menu input
    fn process_menu(&mut self, input: &str) -> Result<(), LibraryError> {
        match MENU.iter().find(|item| item.input == input).map(|item| item.action) {
            Some(MenuAction::Exit) => self.canceled = true,
            Some(MenuAction::RunAlgorithm) => {
                if let Err(e) = self.run_algorithm() {
                    tracing::error!(error = %e, "algorithm failed");
                    writeln!(self.output, "{e}")?;
                }
            }
            None => writeln!(self.output, "Unknown command, try again")?,
        }
        Ok(())
    }

    /// Run the full algorithm once
    ///
    /// # Errors
    ///
    /// Returns a `LibraryError` if input ends early, output cannot be written
    /// or the snapshot cannot be saved or loaded.
    pub fn run_algorithm(&mut self) -> Result<(), LibraryError> {
        let mut library = self.create_library()?;
        self.subscribe_take_observers(&mut library);

        for book in library.iter().filter(|edition| edition.is_book()) {
            book.print();
        }
        self.flush_notices()?;
        writeln!(self.output, "\n{library}")?;

        let letters: Vec<char> =
            library.first_letters_of_books().iter().flatten().copied().collect();
        match self.generator.choose(&letters) {
            Some(start) => {
                library.take_books(start);
                self.flush_notices()?;
            }
            None => writeln!(self.output, "\nNo books to take")?,
        }
        writeln!(self.output, "\n{library}")?;

        let snapshot = self.config.snapshot.clone();
        persistence::save_library(&library, &snapshot)?;
        writeln!(self.output, "\nLibrary saved to {}", snapshot.display())?;

        let mut library: Library<PrintEdition> = persistence::load_library(&snapshot)?;
        self.subscribe_take_observers(&mut library);
        writeln!(self.output, "\nLibrary loaded from {}", snapshot.display())?;
        writeln!(self.output, "\n{library}")?;

        writeln!(self.output, "\nAverageBookPages = {:.2}", library.average_book_pages())?;
        writeln!(self.output, "\nAverageMagazinePages = {:.2}", library.average_magazine_pages())?;

        self.library = Some(library);
        Ok(())
    }

    /// Generate the configured (or prompted) number of valid editions
    fn create_library(&mut self) -> Result<Library<PrintEdition>, LibraryError> {
        let count = match self.config.count {
            Some(count) => count,
            None => {
                writeln!(self.output, "Enter N")?;
                self.read_count()?
            }
        };

        let mut library = Library::with_capacity(usize::try_from(count).unwrap_or_default());
        let mut built = 0_u32;

        while built < count {
            match self.generator.try_edition() {
                Ok(mut edition) => {
                    if edition.is_book() {
                        edition.subscribe_print(Box::new(PrintLogger));
                        edition.subscribe_print(Box::new(self.notices.clone()));
                    }
                    library.add(edition);
                    built = built.saturating_add(1);
                }
                Err(e @ LibraryError::InvalidArgument { .. }) => {
                    tracing::warn!(error = %e, "discarding random edition");
                    writeln!(self.output, "{e}\nRecreating edition...")?;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(library)
    }

    /// Prompt until a positive number of editions is entered
    fn read_count(&mut self) -> Result<u32, LibraryError> {
        loop {
            let line = self.read_line()?.ok_or_else(|| {
                io::Error::new(io::ErrorKind::UnexpectedEof, "input closed while reading N")
            })?;

            match line.trim().parse::<i32>() {
                Ok(n) => match u32::try_from(n) {
                    Ok(n) if n > 0 => return Ok(n),
                    _ => writeln!(self.output, "Cannot create 0 or fewer editions, try again")?,
                },
                Err(_) => writeln!(self.output, "Invalid number format, try again")?,
            }
        }
    }

    /// Attach the session's take observers to `library`
    fn subscribe_take_observers(&self, library: &mut Library<PrintEdition>) {
        library.subscribe_take(Box::new(TakeLogger));
        library.subscribe_take(Box::new(self.notices.clone()));
    }

    /// Write and clear every pending notice
    fn flush_notices(&mut self) -> io::Result<()> {
        for notice in self.notices.drain() {
            writeln!(self.output, "\n{notice}")?;
        }
        Ok(())
    }

    /// Read one line, `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 { Ok(None) } else { Ok(Some(line)) }
    }
}
