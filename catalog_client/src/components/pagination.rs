#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    Previous,
    Page(u32),
    /// Placeholder for a run of pages left out of the window.
    Gap,
    Next,
}

// Pages shown on each side of the current one.
const WINDOW: u32 = 1;

/// How a single control should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    pub control: PageControl,
    pub target: u32,
    pub enabled: bool,
    pub active: bool,
}

/// Stateless page selector. It only reports which page the user picked;
/// the grid that owns it decides what to do with that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationControl {
    current_page: u32,
    total_pages: u32,
}

impl PaginationControl {
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        let total_pages = total_pages.max(1);
        Self {
            current_page: current_page.clamp(1, total_pages),
            total_pages,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Previous, the first and last pages, the pages around the current
    /// one, and Next. Skipped runs collapse into a single [`PageControl::Gap`].
    pub fn controls(&self) -> Vec<ControlState> {
        let mut pages = vec![
            1,
            self.current_page.saturating_sub(WINDOW).max(1),
            self.current_page,
            self.current_page.saturating_add(WINDOW).min(self.total_pages),
            self.total_pages,
        ];
        pages.sort_unstable();
        pages.dedup();

        let mut controls = vec![self.state(PageControl::Previous)];
        let mut previous = 0;
        for page in pages {
            if page > previous + 1 {
                controls.push(self.state(PageControl::Gap));
            }
            controls.push(self.state(PageControl::Page(page)));
            previous = page;
        }
        controls.push(self.state(PageControl::Next));
        controls
    }

    fn state(&self, control: PageControl) -> ControlState {
        let target = match control {
            PageControl::Previous => self.current_page.saturating_sub(1),
            PageControl::Page(page) => page,
            PageControl::Gap => 0,
            PageControl::Next => self.current_page.saturating_add(1),
        };
        let active = matches!(control, PageControl::Page(page) if page == self.current_page);

        ControlState {
            control,
            target,
            enabled: target != self.current_page && (1..=self.total_pages).contains(&target),
            active,
        }
    }

    /// Page the control would switch to, if selecting it changes anything.
    pub fn target(&self, control: PageControl) -> Option<u32> {
        let state = self.state(control);
        state.enabled.then_some(state.target)
    }

    /// Invokes `on_page_change` with the selected page. Returns whether the
    /// callback fired.
    pub fn select(&self, control: PageControl, on_page_change: impl FnOnce(u32)) -> bool {
        match self.target(control) {
            Some(page) => {
                on_page_change(page);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_previous_each_page_and_next() {
        let controls = PaginationControl::new(2, 3).controls();
        let kinds: Vec<_> = controls.iter().map(|state| state.control).collect();

        assert_eq!(
            kinds,
            vec![
                PageControl::Previous,
                PageControl::Page(1),
                PageControl::Page(2),
                PageControl::Page(3),
                PageControl::Next,
            ]
        );
        assert!(controls[2].active);
        assert!(!controls[2].enabled);
        assert!(controls.iter().filter(|state| state.active).count() == 1);
    }

    #[test]
    fn edges_disable_previous_and_next() {
        let first = PaginationControl::new(1, 3);
        assert_eq!(first.target(PageControl::Previous), None);
        assert_eq!(first.target(PageControl::Next), Some(2));

        let last = PaginationControl::new(3, 3);
        assert_eq!(last.target(PageControl::Previous), Some(2));
        assert_eq!(last.target(PageControl::Next), None);
    }

    #[test]
    fn select_reports_the_chosen_page() {
        let control = PaginationControl::new(1, 4);
        let mut chosen = None;

        assert!(control.select(PageControl::Page(3), |page| chosen = Some(page)));
        assert_eq!(chosen, Some(3));
    }

    #[test]
    fn select_ignores_the_active_and_out_of_range_pages() {
        let control = PaginationControl::new(2, 2);
        let mut calls = 0;

        assert!(!control.select(PageControl::Page(2), |_| calls += 1));
        assert!(!control.select(PageControl::Page(5), |_| calls += 1));
        assert!(!control.select(PageControl::Next, |_| calls += 1));
        assert_eq!(calls, 0);
    }

    #[test]
    fn distant_pages_collapse_into_gaps() {
        let kinds: Vec<_> = PaginationControl::new(5, 9)
            .controls()
            .iter()
            .map(|state| state.control)
            .collect();

        assert_eq!(
            kinds,
            vec![
                PageControl::Previous,
                PageControl::Page(1),
                PageControl::Gap,
                PageControl::Page(4),
                PageControl::Page(5),
                PageControl::Page(6),
                PageControl::Gap,
                PageControl::Page(9),
                PageControl::Next,
            ]
        );
        assert_eq!(PaginationControl::new(5, 9).target(PageControl::Gap), None);
    }

    #[test]
    fn huge_page_counts_stay_bounded() {
        let control = PaginationControl::new(1, 4_000_000_000);
        let controls = control.controls();

        assert!(controls.len() <= 9);
        assert_eq!(
            controls[controls.len() - 2].control,
            PageControl::Page(4_000_000_000)
        );
        assert_eq!(control.target(PageControl::Page(4_000_000_000)), Some(4_000_000_000));
    }

    #[test]
    fn next_on_the_last_representable_page_is_disabled() {
        let control = PaginationControl::new(u32::MAX, u32::MAX);

        assert_eq!(control.target(PageControl::Next), None);
        assert_eq!(control.target(PageControl::Previous), Some(u32::MAX - 1));
        assert!(control.controls().len() <= 9);
    }

    #[test]
    fn zero_total_pages_is_treated_as_one() {
        let control = PaginationControl::new(1, 0);

        assert_eq!(control.total_pages(), 1);
        assert_eq!(control.controls().len(), 3);
    }
}
