use log::{info, warn};

use crate::{
    client::PageFetcher,
    components::{Card, PageControl, PaginationControl},
    resource::Resource,
    responses::Envelope,
};

pub const LOADING_TEXT: &str = "Loading...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridStatus {
    Loading,
    Ready,
    Failed(String),
}

/// Handle for one issued page request. Only the most recently issued ticket
/// may update the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    seq: u64,
    page: u32,
}

impl Ticket {
    pub fn page(&self) -> u32 {
        self.page
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// A newer request was issued after this one; the response was dropped.
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GridView {
    Loading,
    Error(String),
    Cards {
        cards: Vec<Card>,
        pagination: PaginationControl,
    },
}

impl GridView {
    /// Centered message shown instead of cards, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Loading => Some(LOADING_TEXT),
            Self::Error(message) => Some(message),
            Self::Cards { .. } => None,
        }
    }
}

/// Paginated card grid for a single resource kind.
///
/// Starts out loading page 1. Each page change issues a [`Ticket`]; the
/// response for it is applied with [`ResourceGrid::complete`].
#[derive(Debug, Clone)]
pub struct ResourceGrid<R: Resource> {
    current_page: u32,
    items: Vec<R>,
    total_pages: u32,
    status: GridStatus,
    issued: u64,
}

impl<R: Resource> Default for ResourceGrid<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> ResourceGrid<R> {
    pub fn new() -> Self {
        Self {
            current_page: 1,
            items: Vec::new(),
            total_pages: 1,
            status: GridStatus::Loading,
            issued: 0,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn status(&self) -> &GridStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == GridStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            GridStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn request_page(&mut self, page: u32) -> Ticket {
        self.issued += 1;
        self.current_page = page.max(1);
        self.status = GridStatus::Loading;

        Ticket {
            seq: self.issued,
            page: self.current_page,
        }
    }

    pub fn complete(&mut self, ticket: Ticket, envelope: Envelope<R>) -> Completion {
        if ticket.seq != self.issued {
            info!(
                "Dropping stale {} response for page {}",
                R::KIND,
                ticket.page
            );
            return Completion::Stale;
        }

        match envelope.pagination() {
            Some(pagination) => {
                self.total_pages = pagination.total_pages();
                self.items = envelope.data;
                self.status = GridStatus::Ready;
            }
            None => {
                warn!("Invalid {} response: missing meta or pagination data", R::KIND);
                self.items.clear();
                self.status = GridStatus::Failed(format!(
                    "Failed to load {}. Please try again later.",
                    R::KIND
                ));
            }
        }
        Completion::Applied
    }

    /// Requests `page` and applies the response once it arrives.
    pub async fn load<F: PageFetcher>(&mut self, fetcher: &F, page: u32) -> Completion {
        let ticket = self.request_page(page);
        let envelope = fetcher.fetch_page::<R>(ticket.page()).await;
        self.complete(ticket, envelope)
    }

    pub async fn mount<F: PageFetcher>(&mut self, fetcher: &F) -> Completion {
        self.load(fetcher, 1).await
    }

    /// Routes a pagination click to [`ResourceGrid::load`]. Returns `None`
    /// when the control does not lead anywhere.
    pub async fn select<F: PageFetcher>(
        &mut self,
        fetcher: &F,
        control: PageControl,
    ) -> Option<Completion> {
        let mut selected = None;
        self.pagination()
            .select(control, |page| selected = Some(page));

        match selected {
            Some(page) => Some(self.load(fetcher, page).await),
            None => None,
        }
    }

    pub fn pagination(&self) -> PaginationControl {
        PaginationControl::new(self.current_page, self.total_pages)
    }

    pub fn view(&self) -> GridView {
        match &self.status {
            GridStatus::Loading => GridView::Loading,
            GridStatus::Failed(message) => GridView::Error(message.clone()),
            GridStatus::Ready => GridView::Cards {
                cards: self.items.iter().map(Resource::card).collect(),
                pagination: self.pagination(),
            },
        }
    }
}
