use std::fmt;

/// メニュー項目（値はメニュー番号）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddEbook = 0,
    AddBook = 1,
    AddMember = 2,
    DisplayBooks = 3,
    DisplayMembers = 4,
    IssueBook = 5,
    ReturnBook = 6,
    DisplayTransactionHistory = 7,
    RemoveMember = 8,
    UpdateMember = 9,
    UpdateBook = 10,
    SearchBooks = 11,
    RemoveBook = 12,
    Exit = 13,
}

impl MenuChoice {
    /// 表示順のすべての項目
    pub const ALL: [MenuChoice; 14] = [
        MenuChoice::AddEbook,
        MenuChoice::AddBook,
        MenuChoice::AddMember,
        MenuChoice::DisplayBooks,
        MenuChoice::DisplayMembers,
        MenuChoice::IssueBook,
        MenuChoice::ReturnBook,
        MenuChoice::DisplayTransactionHistory,
        MenuChoice::RemoveMember,
        MenuChoice::UpdateMember,
        MenuChoice::UpdateBook,
        MenuChoice::SearchBooks,
        MenuChoice::RemoveBook,
        MenuChoice::Exit,
    ];

    /// メニュー番号
    pub fn number(&self) -> usize {
        *self as usize
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddEbook => "Add Ebook",
            MenuChoice::AddBook => "Add Book",
            MenuChoice::AddMember => "Add Member",
            MenuChoice::DisplayBooks => "Display Books",
            MenuChoice::DisplayMembers => "Display Members",
            MenuChoice::IssueBook => "Issue Book",
            MenuChoice::ReturnBook => "Return Book",
            MenuChoice::DisplayTransactionHistory => "Display Transaction History",
            MenuChoice::RemoveMember => "Remove Member",
            MenuChoice::UpdateMember => "Update Member",
            MenuChoice::UpdateBook => "Update Book",
            MenuChoice::SearchBooks => "Search For Books",
            MenuChoice::RemoveBook => "Remove Book",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl std::str::FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| Self::ALL.get(n).copied())
            .ok_or_else(|| format!("Invalid menu choice: {}", s.trim()))
    }
}

/// メニュー全体の表示
pub struct Menu;

impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nLibrary Management System")?;
        for choice in MenuChoice::ALL {
            writeln!(f, "{}. {}", choice.number(), choice.label())?;
        }
        Ok(())
    }
}
