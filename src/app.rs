//! Application state and core logic

use crate::backend::{SubmissionAck, SubmissionBackend, SubmissionError};
use crate::config::TuiConfig;
use crate::state::{
    home_page_height, home_section_row, AppState, FormTarget, ReservationState, SubmitDecision,
    View, FAQ_ENTRIES, HOME_SECTIONS, REVEAL_MARGIN,
};
use crate::ui::{NAV_HEIGHT, SERVICE_CARD_HEIGHT, STATUS_HEIGHT};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// Events delivered back to the UI loop from spawned tasks
#[derive(Debug)]
pub enum AppEvent {
    SubmissionFinished {
        target: FormTarget,
        /// Generation of the reservation dialog that spawned the attempt;
        /// zero for the contact form, which is never torn down
        generation: u64,
        result: Result<SubmissionAck, SubmissionError>,
    },
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: TuiConfig,
    /// Terminal size for viewport calculations (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// Injected submission capability
    backend: Arc<dyn SubmissionBackend>,
    /// Channel completed submissions report back on
    events_tx: mpsc::UnboundedSender<AppEvent>,
    /// Monotonic tag handed to each opened reservation dialog
    reservation_seq: u64,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    pub fn new(
        config: TuiConfig,
        backend: Arc<dyn SubmissionBackend>,
        events_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            state: AppState::new(&config),
            config,
            terminal_size: None,
            backend,
            events_tx,
            reservation_seq: 0,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Rows of the main content area between nav and status bars
    fn viewport_height(&self) -> u16 {
        self.terminal_size
            .map(|(h, _)| h.saturating_sub(NAV_HEIGHT + STATUS_HEIGHT))
            .unwrap_or(20)
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Close affordance for the transient banners (before anything else)
        if key.code == KeyCode::Esc && !self.state.notifications.is_empty() {
            self.state.notifications.dismiss_oldest();
            return Ok(());
        }

        // The reservation dialog is modal
        if self.state.reservation.is_some() {
            self.handle_reservation_key(key);
            return Ok(());
        }

        match self.state.current_view {
            View::Home => self.handle_home_key(key),
            View::Services => self.handle_services_key(key),
            View::Testimonials => self.handle_testimonials_key(key),
            View::Faq => self.handle_faq_key(key),
            View::Contact => self.handle_contact_key(key),
        }
        Ok(())
    }

    /// Shared navigation keys for the non-form views.
    /// Returns true if the key was consumed.
    fn handle_nav_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('1') => self.state.navigate(View::Home),
            KeyCode::Char('2') => self.state.navigate(View::Services),
            KeyCode::Char('3') => self.state.navigate(View::Testimonials),
            KeyCode::Char('4') => self.state.navigate(View::Faq),
            KeyCode::Char('5') => self.state.navigate(View::Contact),
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Esc | KeyCode::Backspace => self.state.go_back(),
            _ => return false,
        }
        true
    }

    /// Handle keys in the Home view
    fn handle_home_key(&mut self, key: KeyEvent) {
        if self.handle_nav_key(&key) {
            return;
        }
        let max = home_page_height().saturating_sub(1);
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.home_scroll.scroll_down(max),
            KeyCode::Char('k') | KeyCode::Up => self.state.home_scroll.scroll_up(),
            // Anchor jumps between sections, eased like the site's smooth scroll
            KeyCode::Char('n') | KeyCode::Tab => {
                if self.state.home_section + 1 < HOME_SECTIONS.len() {
                    self.state.home_section += 1;
                }
                self.scroll_home_to_section();
            }
            KeyCode::Char('p') | KeyCode::BackTab => {
                self.state.home_section = self.state.home_section.saturating_sub(1);
                self.scroll_home_to_section();
            }
            _ => {}
        }
    }

    fn scroll_home_to_section(&mut self) {
        let row = home_section_row(self.state.home_section);
        if self.config.reduce_motion() {
            self.state.home_scroll.jump_to_anchor(row);
        } else {
            self.state.home_scroll.scroll_to_anchor(row);
        }
    }

    /// Handle keys in the Services view
    fn handle_services_key(&mut self, key: KeyEvent) {
        if self.handle_nav_key(&key) {
            return;
        }
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if self.state.selected_service + 1 < self.state.services.len() {
                    self.state.selected_service += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.state.selected_service = self.state.selected_service.saturating_sub(1);
            }
            KeyCode::Enter => self.open_reservation(),
            _ => {}
        }
    }

    /// Open the reservation dialog for the selected service, carrying its
    /// name and formatted price into the form
    fn open_reservation(&mut self) {
        let Some(service) = self.state.services.get(self.state.selected_service) else {
            return;
        };
        tracing::info!(service = service.name, "reservation dialog opened");
        self.reservation_seq += 1;
        let mut reservation = ReservationState::for_service(service);
        reservation.generation = self.reservation_seq;
        self.state.reservation = Some(reservation);
    }

    /// Handle keys in the Testimonials view
    fn handle_testimonials_key(&mut self, key: KeyEvent) {
        if self.handle_nav_key(&key) {
            return;
        }
        match key.code {
            KeyCode::Char('l') | KeyCode::Right => self.state.carousel.next(),
            KeyCode::Char('h') | KeyCode::Left => self.state.carousel.prev(),
            KeyCode::Char(' ') => {
                if self.state.carousel.is_paused() {
                    self.state.carousel.cycle();
                } else {
                    self.state.carousel.pause();
                }
            }
            _ => {}
        }
    }

    /// Handle keys in the FAQ view
    fn handle_faq_key(&mut self, key: KeyEvent) {
        if self.handle_nav_key(&key) {
            return;
        }
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.faq.select_next(FAQ_ENTRIES.len()),
            KeyCode::Char('k') | KeyCode::Up => self.state.faq.select_prev(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let selected = self.state.faq.selected;
                self.state.faq.toggle(selected);
            }
            _ => {}
        }
    }

    /// Handle keys in the Contact view (a form view: characters are input)
    fn handle_contact_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit(FormTarget::Contact);
            }
            KeyCode::Esc => self.state.go_back(),
            KeyCode::Tab => self.state.contact_form.next_field(),
            KeyCode::BackTab => self.state.contact_form.prev_field(),
            KeyCode::Enter if self.state.contact_form.is_submit_row_active() => {
                self.submit(FormTarget::Contact);
            }
            KeyCode::Enter => {
                if let Some(field) = self.state.contact_form.active_field_mut() {
                    if field.is_multiline {
                        field.push_char('\n');
                    }
                }
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.state.contact_form.active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.contact_form.active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
    }

    /// Handle keys while the reservation dialog is open
    fn handle_reservation_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            // closing mid-delay is allowed; the completion will no-op
            self.state.reservation = None;
            return;
        }
        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.submit(FormTarget::Reservation);
            return;
        }
        let mut do_submit = false;
        if let Some(reservation) = self.state.reservation.as_mut() {
            let form = &mut reservation.form;
            match key.code {
                KeyCode::Tab => form.next_field(),
                KeyCode::BackTab => form.prev_field(),
                KeyCode::Enter if form.is_submit_row_active() => do_submit = true,
                KeyCode::Enter => {
                    if let Some(field) = form.active_field_mut() {
                        if field.is_multiline {
                            field.push_char('\n');
                        }
                    }
                }
                KeyCode::Char(c) => {
                    if let Some(field) = form.active_field_mut() {
                        field.push_char(c);
                    }
                }
                KeyCode::Backspace => {
                    if let Some(field) = form.active_field_mut() {
                        field.pop_char();
                    }
                }
                _ => {}
            }
        }
        if do_submit {
            self.submit(FormTarget::Reservation);
        }
    }

    /// Start a submission attempt for the given form. On acceptance the
    /// backend call runs as a spawned task and reports back over the
    /// event channel.
    pub fn submit(&mut self, target: FormTarget) {
        let (decision, generation) = match target {
            FormTarget::Contact => (
                self.state
                    .contact_workflow
                    .begin_submit(&mut self.state.contact_form),
                0,
            ),
            FormTarget::Reservation => match self.state.reservation.as_mut() {
                Some(reservation) => (
                    reservation.workflow.begin_submit(&mut reservation.form),
                    reservation.generation,
                ),
                None => return,
            },
        };

        if let SubmitDecision::Accepted(payload) = decision {
            let backend = Arc::clone(&self.backend);
            let tx = self.events_tx.clone();
            tokio::spawn(async move {
                let result = backend.submit(payload).await;
                let _ = tx.send(AppEvent::SubmissionFinished {
                    target,
                    generation,
                    result,
                });
            });
        }
    }

    /// Apply an event from a spawned task
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::SubmissionFinished {
                target,
                generation,
                result,
            } => {
                let request = match target {
                    FormTarget::Contact => self
                        .state
                        .contact_workflow
                        .finish(&mut self.state.contact_form, result),
                    FormTarget::Reservation => match self.state.reservation.as_mut() {
                        Some(reservation) if reservation.generation == generation => {
                            reservation.workflow.finish(&mut reservation.form, result)
                        }
                        // the dialog that spawned this attempt was closed
                        // during the delay window; a reopened dialog carries
                        // a different generation and must not be touched
                        _ => {
                            tracing::debug!(generation, "dropping completion for a closed dialog");
                            return;
                        }
                    },
                };
                self.state.notifications.push(request);
            }
        }
    }

    /// Advance timers and animations. Called once per loop iteration.
    pub fn tick(&mut self, now: Instant) {
        self.state.notifications.tick(now);
        if self.state.carousel.tick(now) {
            tracing::trace!(slide = self.state.carousel.index(), "carousel advanced");
        }
        self.state.home_scroll.tick(now);
        self.observe_reveals(now);
    }

    /// Mark elements of the current view as revealed once they are inside
    /// the viewport (past the reveal margin). Reveals are sticky.
    fn observe_reveals(&mut self, now: Instant) {
        let viewport = self.viewport_height();
        match self.state.current_view {
            View::Home => {
                let offset = self.state.home_scroll.offset();
                for index in 0..HOME_SECTIONS.len() {
                    let row = home_section_row(index);
                    let visible = row >= offset && row + REVEAL_MARGIN < offset + viewport;
                    self.state.home_reveal.observe(index, visible, now);
                }
            }
            View::Services => {
                for index in 0..self.state.services.len() {
                    let top = index as u16 * SERVICE_CARD_HEIGHT;
                    let visible = top + REVEAL_MARGIN < viewport;
                    self.state.services_reveal.observe(index, visible, now);
                }
            }
            _ => {}
        }
    }

    /// Whether a fast poll cadence is needed for smooth animation
    pub fn is_animating(&self, now: Instant) -> bool {
        self.state.home_scroll.is_animating()
            || self.state.contact_workflow.in_flight()
            || self
                .state
                .reservation
                .as_ref()
                .is_some_and(|r| r.workflow.in_flight())
            || match self.state.current_view {
                View::Home => self.state.home_reveal.is_transitioning(now),
                View::Services => self.state.services_reveal.is_transitioning(now),
                _ => false,
            }
    }
}
