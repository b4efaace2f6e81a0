use dialoguer::console::Term;
use jukebox::assets::Category;
use jukebox::core::{JukeboxError, JukeboxResult};

/// Source of single key presses (for dependency injection in tests)
pub trait KeyInput {
    fn read_key(&mut self) -> JukeboxResult<char>;
}

/// Real implementation reading one key from the terminal, no ENTER needed
pub struct TermInput {
    term: Term,
}

impl TermInput {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for TermInput {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyInput for TermInput {
    fn read_key(&mut self) -> JukeboxResult<char> {
        self.term
            .read_char()
            .map_err(|e| JukeboxError::Input(format!("Failed to read key: {}", e)))
    }
}

/// What the user picked from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Extract(Category),
    Exit,
}

impl MenuChoice {
    /// Map a key to a menu entry; other keys are ignored
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '1' => Some(MenuChoice::Extract(Category::Music)),
            '2' => Some(MenuChoice::Extract(Category::Sounds)),
            '0' => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

pub fn print_menu() {
    println!();
    println!("1. Extract music only.");
    println!("2. Extract music & sound effects.");
    println!("0. Exit");
    println!("Press a key to select an option above.");
}

/// Read keys until one selects a menu entry
pub fn choose(input: &mut dyn KeyInput) -> JukeboxResult<MenuChoice> {
    loop {
        let key = input.read_key()?;
        if let Some(choice) = MenuChoice::from_key(key) {
            return Ok(choice);
        }
    }
}
