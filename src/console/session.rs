use crate::application::catalog::{Catalog, CatalogError};
use crate::domain::{CatalogItem, Format, Member, MemberId, Transaction, commands::UpdateItem};
use std::io::{self, BufRead, Write};

use super::menu::{Menu, MenuChoice};
use super::prompt::Prompt;

/// Whether the session keeps going after a menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Interactive console session driving a `Catalog`.
///
/// Each menu choice reads its arguments, calls one catalog operation and
/// prints the outcome. Catalog errors are printed, never propagated; only
/// I/O failures end the session with an error.
pub struct Session<'a, R, W> {
    catalog: &'a mut Catalog,
    prompt: Prompt<R, W>,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(catalog: &'a mut Catalog, input: R, output: W) -> Self {
        Self {
            catalog,
            prompt: Prompt::new(input, output),
        }
    }

    pub fn into_output(self) -> W {
        self.prompt.into_output()
    }

    /// Run until Exit is chosen or input runs out
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            write!(self.prompt.output(), "{}", Menu)?;
            let Some(answer) = self.prompt.line("Enter your choice: ")? else {
                return Ok(());
            };

            let flow = match answer.parse::<MenuChoice>() {
                Ok(choice) => self.dispatch(choice)?,
                Err(err) => {
                    tracing::debug!(%err, "unknown menu choice");
                    writeln!(self.out(), "Invalid choice. Please try again.")?;
                    Some(Flow::Continue)
                }
            };

            // None means the input ended mid-action
            match flow {
                Some(Flow::Continue) => continue,
                Some(Flow::Exit) | None => return Ok(()),
            }
        }
    }

    /// Perform one menu action
    pub fn dispatch(&mut self, choice: MenuChoice) -> io::Result<Option<Flow>> {
        let done = match choice {
            MenuChoice::AddEbook => self.add_item(Format::Electronic)?,
            MenuChoice::AddBook => self.add_item(Format::Physical)?,
            MenuChoice::AddMember => self.add_member()?,
            MenuChoice::DisplayBooks => self.display_books()?,
            MenuChoice::DisplayMembers => self.display_members()?,
            MenuChoice::IssueBook => self.issue()?,
            MenuChoice::ReturnBook => self.return_item()?,
            MenuChoice::DisplayTransactionHistory => self.display_transaction_history()?,
            MenuChoice::RemoveMember => self.remove_member()?,
            MenuChoice::UpdateMember => self.rename_member()?,
            MenuChoice::UpdateBook => self.update_item()?,
            MenuChoice::SearchBooks => self.search()?,
            MenuChoice::RemoveBook => self.remove_item()?,
            MenuChoice::Exit => {
                writeln!(self.out(), "Exiting Library Management System.")?;
                return Ok(Some(Flow::Exit));
            }
        };
        Ok(done.map(|()| Flow::Continue))
    }

    fn out(&mut self) -> &mut W {
        self.prompt.output()
    }

    fn report(&mut self, err: &CatalogError) -> io::Result<()> {
        writeln!(self.out(), "{}", err)
    }

    fn add_item(&mut self, format: Format) -> io::Result<Option<()>> {
        let noun = match format {
            Format::Physical => "Book",
            Format::Electronic => "EBook",
        };
        let Some(id) = self.prompt.int(&format!("Enter {} ID: ", noun))? else {
            return Ok(None);
        };
        let Some(title) = self.prompt.line(&format!("Enter {} Title: ", noun))? else {
            return Ok(None);
        };
        let Some(author) = self.prompt.line(&format!("Enter {} Author: ", noun))? else {
            return Ok(None);
        };
        let item = match format {
            Format::Physical => {
                let Some(copies) = self.prompt.int("Enter Number of Copies: ")? else {
                    return Ok(None);
                };
                CatalogItem::physical(id, title, author, copies)
            }
            Format::Electronic => {
                let Some(size) = self.prompt.int("Enter File Size (MB): ")? else {
                    return Ok(None);
                };
                CatalogItem::electronic(id, title, author, size)
            }
        };

        let title = item.title().to_string();
        match self.catalog.add_item(item) {
            Ok(()) => writeln!(self.out(), "Book/Ebook '{}' added to the library.", title)?,
            Err(err) => self.report(&err)?,
        }
        Ok(Some(()))
    }

    fn add_member(&mut self) -> io::Result<Option<()>> {
        let Some(id) = self.prompt.int("Enter Member ID: ")? else {
            return Ok(None);
        };
        let Some(name) = self.prompt.line("Enter Member Name: ")? else {
            return Ok(None);
        };

        match self.catalog.add_member(Member::new(id, name.clone())) {
            Ok(()) => writeln!(self.out(), "Member '{}' added to the library.", name)?,
            Err(err) => self.report(&err)?,
        }
        Ok(Some(()))
    }

    fn display_books(&mut self) -> io::Result<Option<()>> {
        let lines: Vec<String> = self
            .catalog
            .items()
            .iter()
            .map(|item| format!("{:<8}{}", item.label(), item.describe()))
            .collect();

        writeln!(self.out(), "\nLibrary Books:")?;
        for line in lines {
            writeln!(self.out(), "{}", line)?;
        }
        Ok(Some(()))
    }

    fn display_members(&mut self) -> io::Result<Option<()>> {
        let records = self.catalog.member_records();

        writeln!(self.out(), "\nLibrary Members:")?;
        for record in records {
            writeln!(self.out(), "{}", record)?;
        }
        Ok(Some(()))
    }

    fn member_and_item_ids(&mut self) -> io::Result<Option<(u32, u32)>> {
        let Some(member_id) = self.prompt.int("Enter Member ID: ")? else {
            return Ok(None);
        };
        let Some(item_id) = self.prompt.int("Enter Book ID: ")? else {
            return Ok(None);
        };
        Ok(Some((member_id, item_id)))
    }

    fn member_name(&self, id: MemberId) -> String {
        self.catalog
            .member(id)
            .map(|member| member.name().to_string())
            .unwrap_or_default()
    }

    fn issue(&mut self) -> io::Result<Option<()>> {
        let Some((member_id, item_id)) = self.member_and_item_ids()? else {
            return Ok(None);
        };

        match self.catalog.issue(member_id, item_id) {
            Ok(transaction) => {
                let name = self.member_name(MemberId::new(member_id));
                let ebook = if transaction.format.is_electronic() {
                    "Ebook "
                } else {
                    ""
                };
                writeln!(
                    self.out(),
                    "{} borrowed {}'{}'",
                    name, ebook, transaction.title
                )?;
            }
            Err(err) => self.report(&err)?,
        }
        Ok(Some(()))
    }

    fn return_item(&mut self) -> io::Result<Option<()>> {
        let Some((member_id, item_id)) = self.member_and_item_ids()? else {
            return Ok(None);
        };

        match self.catalog.return_item(member_id, item_id) {
            Ok(transaction) => {
                let name = self.member_name(MemberId::new(member_id));
                writeln!(self.out(), "{} returned '{}'", name, transaction.title)?;
            }
            Err(err) => self.report(&err)?,
        }
        Ok(Some(()))
    }

    fn display_transaction_history(&mut self) -> io::Result<Option<()>> {
        let histories: Vec<(String, Vec<String>)> = self
            .catalog
            .transaction_histories()
            .into_iter()
            .map(|history| {
                let entries = history
                    .transactions
                    .iter()
                    .map(Transaction::to_string)
                    .collect();
                (history.name.to_string(), entries)
            })
            .collect();

        for (name, entries) in histories {
            writeln!(self.out(), "\nTransaction History for {}:", name)?;
            if entries.is_empty() {
                writeln!(self.out(), "No transaction history.")?;
            }
            for entry in entries {
                writeln!(self.out(), "{}", entry)?;
            }
        }
        Ok(Some(()))
    }

    fn remove_member(&mut self) -> io::Result<Option<()>> {
        let Some(id) = self.prompt.int("Enter Member ID: ")? else {
            return Ok(None);
        };

        match self.catalog.remove_member(id) {
            Ok(member) => writeln!(
                self.out(),
                "Member '{}' removed from the library.",
                member.name()
            )?,
            Err(err) => self.report(&err)?,
        }
        Ok(Some(()))
    }

    fn rename_member(&mut self) -> io::Result<Option<()>> {
        let Some(id) = self.prompt.int("Enter Member ID: ")? else {
            return Ok(None);
        };
        let Some(new_name) = self.prompt.line("Input The Rename: ")? else {
            return Ok(None);
        };

        match self.catalog.rename_member(id, new_name.clone()) {
            Ok(old_name) => writeln!(
                self.out(),
                "Member '{}' renamed to '{}'.",
                old_name, new_name
            )?,
            Err(err) => self.report(&err)?,
        }
        Ok(Some(()))
    }

    fn update_item(&mut self) -> io::Result<Option<()>> {
        let Some(id) = self
            .prompt
            .int("Enter The ID Of The Book You Want To update: ")?
        else {
            return Ok(None);
        };
        let Some(format) = self.catalog.item(id).map(CatalogItem::format) else {
            self.report(&CatalogError::ItemNotFound(id.into()))?;
            return Ok(Some(()));
        };

        let Some(title) = self.prompt.line("Enter New Book Title: ")? else {
            return Ok(None);
        };
        let Some(author) = self.prompt.line("Enter Book Author: ")? else {
            return Ok(None);
        };
        let mut update = UpdateItem {
            title: Some(title),
            author: Some(author),
            ..UpdateItem::default()
        };
        match format {
            Format::Physical => {
                let Some(copies) = self.prompt.optional_int("Enter Number of Copies: ")? else {
                    return Ok(None);
                };
                update.copies = copies;
            }
            Format::Electronic => {
                let Some(size) = self.prompt.optional_int("Enter File Size (MB): ")? else {
                    return Ok(None);
                };
                update.file_size_mb = size;
            }
        }

        match self.catalog.update_item(id, &update) {
            Ok(_) => writeln!(self.out(), "Book '{}' updated successfully.", id)?,
            Err(err) => self.report(&err)?,
        }
        Ok(Some(()))
    }

    fn search(&mut self) -> io::Result<Option<()>> {
        let Some(term) = self.prompt.line("Search For Book: ")? else {
            return Ok(None);
        };

        let records: Vec<_> = self
            .catalog
            .search(&term)
            .into_iter()
            .map(CatalogItem::describe)
            .collect();

        if records.is_empty() {
            writeln!(self.out(), "No books found matching '{}'.", term)?;
        } else {
            writeln!(self.out(), "\nSearch Results:")?;
            for record in records {
                writeln!(self.out(), "{}", record)?;
            }
        }
        Ok(Some(()))
    }

    fn remove_item(&mut self) -> io::Result<Option<()>> {
        let Some(id) = self
            .prompt
            .int("Enter The ID Of The Book You Want To Remove: ")?
        else {
            return Ok(None);
        };

        match self.catalog.remove_item(id) {
            Ok(item) => writeln!(
                self.out(),
                "Book '{}' removed from the library.",
                item.title()
            )?,
            Err(err) => self.report(&err)?,
        }
        Ok(Some(()))
    }
}
