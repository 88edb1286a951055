use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::warn;
use crate::books::dto::BookDto;
use crate::books::factory::create_book_repository;
use crate::catalog::command::add_book_cmd::AddBookCommandRequest;
use crate::catalog::command::check_availability_cmd::CheckAvailabilityCommandRequest;
use crate::catalog::command::list_books_cmd::ListBooksCommandRequest;
use crate::catalog::controller as catalog_controller;
use crate::catalog::domain::CatalogService;
use crate::catalog::factory as catalog_factory;
use crate::circulation::command::issue_book_cmd::IssueBookCommandRequest;
use crate::circulation::command::return_book_cmd::ReturnBookCommandRequest;
use crate::circulation::controller as circulation_controller;
use crate::circulation::domain::CirculationService;
use crate::circulation::factory as circulation_factory;
use crate::console::MenuChoice;
use crate::console::prompt;
use crate::core::controller::AppState;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;

const MENU_CHOICES: [MenuChoice; 6] = [
    MenuChoice::AddBook,
    MenuChoice::CheckAvailability,
    MenuChoice::IssueBook,
    MenuChoice::ReturnBook,
    MenuChoice::ListBooks,
    MenuChoice::Exit,
];

const DEMO_BOOKS: [(&str, &str, i64); 5] = [
    ("Clean Code", "Robert C. Martin", 5),
    ("Effective Java", "Joshua Bloch", 4),
    ("Introduction to Algorithms", "Cormen", 6),
    ("Head First Java", "Kathy Sierra", 3),
    ("Design Patterns", "Erich Gamma", 2),
];

// Menu owns the registry services and drives the numbered console loop; the
// caller hands it the reader and writer, so tests can script a session.
pub(crate) struct Menu {
    config: Configuration,
    catalog_service: Arc<dyn CatalogService>,
    circulation_service: Arc<dyn CirculationService>,
}

impl Menu {
    pub(crate) async fn new(state: &AppState) -> Menu {
        let book_repo = create_book_repository(state.store).await;
        let catalog_service = catalog_factory::create_catalog_service(
            &state.config, state.store, book_repo.clone()).await;
        let circulation_service = circulation_factory::create_circulation_service(
            &state.config, state.store, book_repo).await;
        Menu {
            config: state.config.clone(),
            catalog_service,
            circulation_service,
        }
    }

    pub(crate) async fn seed_demo_books(&self) {
        for (title, author, copies) in DEMO_BOOKS {
            if let Err(err) = self.catalog_service.add_book(&BookDto::new(title, author, copies)).await {
                warn!("failed to seed {}: {}", title, err);
            }
        }
    }

    pub(crate) async fn run<R, W>(&self, reader: &mut R, writer: &mut W) -> LibraryResult<()>
        where R: AsyncBufRead + Unpin, W: AsyncWrite + Unpin {
        loop {
            write_menu(writer).await?;
            let line = match read_line(reader).await? {
                Some(line) => line,
                None => break,
            };
            let choice = match prompt::parse_choice(line.as_str()) {
                Ok(choice) => choice,
                Err(_) => {
                    write_line(writer, "Invalid input! Enter numbers only.").await?;
                    continue;
                }
            };
            match choice {
                MenuChoice::AddBook => self.add_book(reader, writer).await?,
                MenuChoice::CheckAvailability => self.check_availability(reader, writer).await?,
                MenuChoice::IssueBook => self.issue_book(reader, writer).await?,
                MenuChoice::ReturnBook => self.return_book(reader, writer).await?,
                MenuChoice::ListBooks => self.list_books(writer).await?,
                MenuChoice::Exit => {
                    write_line(writer, "Thank you. Exiting program.").await?;
                    break;
                }
                MenuChoice::Unknown => {
                    write_line(writer, "Invalid choice!").await?;
                }
            }
        }
        Ok(())
    }

    async fn add_book<R, W>(&self, reader: &mut R, writer: &mut W) -> LibraryResult<()>
        where R: AsyncBufRead + Unpin, W: AsyncWrite + Unpin {
        let Some((title, author)) = prompt_book(reader, writer).await? else {
            return Ok(());
        };
        let copies = loop {
            let Some(line) = prompt_line(reader, writer, "Copies: ").await? else {
                return Ok(());
            };
            match prompt::parse_copies(line.as_str()) {
                Ok(copies) => break copies,
                Err(_) => {
                    write_line(writer, "Invalid input! Enter numbers only.").await?;
                }
            }
        };
        let req = AddBookCommandRequest::new(title.as_str(), author.as_str(), copies);
        match catalog_controller::add_book(self.catalog_service.clone(), req).await {
            Ok(_) => write_line(writer, "Book added successfully.").await,
            Err(message) => write_line(writer, message.as_str()).await,
        }
    }

    async fn check_availability<R, W>(&self, reader: &mut R, writer: &mut W) -> LibraryResult<()>
        where R: AsyncBufRead + Unpin, W: AsyncWrite + Unpin {
        let Some((title, author)) = prompt_book(reader, writer).await? else {
            return Ok(());
        };
        let req = CheckAvailabilityCommandRequest::new(title.as_str(), author.as_str());
        match catalog_controller::check_availability(self.catalog_service.clone(), req).await {
            Ok(res) => {
                write_line(writer, res.book.to_string().as_str()).await?;
                write_line(writer, format!("Status: {}", res.status).as_str()).await
            }
            Err(message) => write_line(writer, message.as_str()).await,
        }
    }

    async fn issue_book<R, W>(&self, reader: &mut R, writer: &mut W) -> LibraryResult<()>
        where R: AsyncBufRead + Unpin, W: AsyncWrite + Unpin {
        let Some((title, author)) = prompt_book(reader, writer).await? else {
            return Ok(());
        };
        let req = IssueBookCommandRequest::new(title.as_str(), author.as_str());
        match circulation_controller::issue_book(self.circulation_service.clone(), req).await {
            Ok(_) => write_line(writer, "Book issued successfully.").await,
            Err(message) => write_line(writer, message.as_str()).await,
        }
    }

    async fn return_book<R, W>(&self, reader: &mut R, writer: &mut W) -> LibraryResult<()>
        where R: AsyncBufRead + Unpin, W: AsyncWrite + Unpin {
        let Some((title, author)) = prompt_book(reader, writer).await? else {
            return Ok(());
        };
        let req = ReturnBookCommandRequest::new(title.as_str(), author.as_str());
        match circulation_controller::return_book(self.circulation_service.clone(), req).await {
            Ok(_) => write_line(writer, "Book returned successfully.").await,
            Err(message) => write_line(writer, message.as_str()).await,
        }
    }

    async fn list_books<W>(&self, writer: &mut W) -> LibraryResult<()>
        where W: AsyncWrite + Unpin {
        let mut books = vec![];
        let mut page: Option<String> = None;
        loop {
            let req = ListBooksCommandRequest::new(page.as_deref(), self.config.list_page_size);
            match catalog_controller::list_books(self.catalog_service.clone(), req).await {
                Ok(res) => {
                    books.extend(res.books);
                    page = res.next_page;
                }
                Err(message) => {
                    return write_line(writer, message.as_str()).await;
                }
            }
            if page.is_none() {
                break;
            }
        }
        if books.is_empty() {
            return write_line(writer, "Library is empty.").await;
        }
        write_line(writer, "\n===== LIBRARY BOOKS =====").await?;
        for book in books {
            write_line(writer, book.to_string().as_str()).await?;
        }
        write_line(writer, "========================").await
    }
}

async fn write_menu<W>(writer: &mut W) -> LibraryResult<()>
    where W: AsyncWrite + Unpin {
    let mut text = String::from("\n");
    for (i, choice) in MENU_CHOICES.iter().enumerate() {
        text.push_str(format!("{}. {}\n", i + 1, choice).as_str());
    }
    text.push_str("Enter choice: ");
    write_str(writer, text.as_str()).await
}

async fn prompt_book<R, W>(reader: &mut R, writer: &mut W) -> LibraryResult<Option<(String, String)>>
    where R: AsyncBufRead + Unpin, W: AsyncWrite + Unpin {
    let Some(title) = prompt_line(reader, writer, "Title: ").await? else {
        return Ok(None);
    };
    let Some(author) = prompt_line(reader, writer, "Author: ").await? else {
        return Ok(None);
    };
    Ok(Some((title, author)))
}

async fn prompt_line<R, W>(reader: &mut R, writer: &mut W, label: &str) -> LibraryResult<Option<String>>
    where R: AsyncBufRead + Unpin, W: AsyncWrite + Unpin {
    write_str(writer, label).await?;
    read_line(reader).await
}

// Returns None at end of input so the loop can wind down like an Exit choice.
async fn read_line<R>(reader: &mut R) -> LibraryResult<Option<String>>
    where R: AsyncBufRead + Unpin {
    let mut line = String::new();
    let n = reader.read_line(&mut line).await?;
    if n == 0 {
        Ok(None)
    } else {
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}

async fn write_line<W>(writer: &mut W, line: &str) -> LibraryResult<()>
    where W: AsyncWrite + Unpin {
    write_str(writer, format!("{}\n", line).as_str()).await
}

async fn write_str<W>(writer: &mut W, text: &str) -> LibraryResult<()>
    where W: AsyncWrite + Unpin {
    writer.write_all(text.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}
