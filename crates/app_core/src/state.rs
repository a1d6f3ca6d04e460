//! Page-level state
//!
//! Owns everything the page mutates in response to UI events: the catalog
//! order, the active filter, the lightbox, the language and the contact
//! form. All mutation happens on the UI thread, one event at a time.

use crate::catalog::{Catalog, CatalogLoader, ImageName};
use crate::command::{Command, CommandId, KeyScope};
use crate::contact::{ContactForm, ContactSender, FormTransport, HttpFormTransport, SubmitOutcome};
use crate::filter::{available_filters, Filter, FilterState};
use crate::i18n::{I18n, Language};
use crate::lightbox::{Lightbox, LightboxEvent, LightboxState};
use crate::preferences::{load_language, save_language, PreferenceStore};
use crate::resource::ResourceResolver;
use crate::scroll_lock::PageScroll;
use crate::{AppConfig, AppError};
use rand::Rng;
use std::str::FromStr;
use std::sync::Arc;

/// Page sections that navigation can scroll to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Gallery,
    About,
    Contact,
}

impl Section {
    pub fn id(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Gallery => "gallery",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }
}

impl FromStr for Section {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hero" => Ok(Section::Hero),
            "gallery" => Ok(Section::Gallery),
            "about" => Ok(Section::About),
            "contact" => Ok(Section::Contact),
            other => Err(AppError::Config(format!("Unknown section: {}", other))),
        }
    }
}

/// Where the contact form stands
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContactStatus {
    #[default]
    Idle,
    Missing,
    Sending,
    Sent,
    Failed,
    Unavailable,
}

/// Main page state
pub struct PortfolioState {
    config: AppConfig,
    catalog: CatalogLoader,
    filter: FilterState,
    scroll: PageScroll,
    lightbox: Lightbox,
    i18n: I18n,
    preferences: Box<dyn PreferenceStore>,
    resources: ResourceResolver,
    scroll_target: Option<Section>,

    pub contact_form: ContactForm,
    contact_status: ContactStatus,
    contact_sender: Option<ContactSender>,
}

impl PortfolioState {
    /// Create the page state
    ///
    /// The stored language is read once here; the contact transport is
    /// built from `config.contact.endpoint` when present.
    pub fn new(config: AppConfig, preferences: Box<dyn PreferenceStore>) -> Result<Self, AppError> {
        let transport: Option<Arc<dyn FormTransport>> = match &config.contact.endpoint {
            Some(endpoint) => Some(Arc::new(HttpFormTransport::new(endpoint)?)),
            None => None,
        };
        Self::with_transport(config, preferences, transport)
    }

    /// Create the page state with an explicit form transport
    pub fn with_transport(
        config: AppConfig,
        preferences: Box<dyn PreferenceStore>,
        transport: Option<Arc<dyn FormTransport>>,
    ) -> Result<Self, AppError> {
        let language = load_language(preferences.as_ref(), config.general.default_language());
        let i18n = I18n::new(language)?;
        let resources = ResourceResolver::new(&config.gallery.base_path, &config.gallery.images_dir);
        let scroll = PageScroll::new();

        tracing::info!(language = %language, "Page state initialized");

        Ok(Self {
            catalog: CatalogLoader::new(),
            filter: FilterState::new(),
            lightbox: Lightbox::new(scroll.clone()),
            scroll,
            i18n,
            preferences,
            resources,
            scroll_target: None,
            contact_form: ContactForm::default(),
            contact_status: ContactStatus::Idle,
            contact_sender: transport.map(ContactSender::new),
            config,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    pub fn resources(&self) -> &ResourceResolver {
        &self.resources
    }

    // ===== Catalog & filter =====

    /// Receive the catalog; shuffles only if it is a different catalog
    pub fn load_catalog<R: Rng + ?Sized>(&mut self, catalog: Catalog, rng: &mut R) -> bool {
        self.catalog.load(catalog, rng)
    }

    /// Catalog in session display order
    pub fn images(&self) -> &[ImageName] {
        self.catalog.images()
    }

    pub fn available_filters(&self) -> Vec<Filter> {
        available_filters(self.catalog.images())
    }

    pub fn active_filter(&self) -> &Filter {
        self.filter.active()
    }

    pub fn set_filter(&mut self, id: &str) {
        self.filter.set_filter(id);
    }

    pub fn visible_set(&self) -> Vec<ImageName> {
        self.filter.visible_set(self.catalog.images())
    }

    pub fn filter_label(&self, filter: &Filter) -> String {
        self.config
            .gallery
            .filter_labels
            .label(filter, &self.i18n.get("filter-all"))
    }

    // ===== Lightbox =====

    /// Open the lightbox on position `index` of the current visible set
    pub fn open_image(&mut self, index: usize) -> bool {
        let images = self.visible_set();
        self.lightbox.dispatch(LightboxEvent::Open { images, index })
    }

    pub fn lightbox(&self) -> &LightboxState {
        self.lightbox.state()
    }

    pub fn dispatch_lightbox(&mut self, event: LightboxEvent) -> bool {
        self.lightbox.dispatch(event)
    }

    pub fn key_scope(&self) -> KeyScope {
        self.lightbox.key_scope()
    }

    pub fn scroll_enabled(&self) -> bool {
        self.scroll.is_enabled()
    }

    // ===== Language =====

    pub fn language(&self) -> Language {
        self.i18n.language()
    }

    /// Switch language and persist the choice
    pub fn set_language(&mut self, language: Language) {
        self.i18n.set_language(language);
        if let Err(e) = save_language(self.preferences.as_mut(), language) {
            tracing::warn!("Failed to save language preference: {}", e);
        }
        tracing::info!(language = %language, "Language changed");
    }

    // ===== Navigation =====

    pub fn scroll_to(&mut self, section: Section) {
        self.scroll_target = Some(section);
    }

    /// Pending scroll request, consumed by the renderer
    pub fn take_scroll_target(&mut self) -> Option<Section> {
        self.scroll_target.take()
    }

    // ===== Contact =====

    pub fn contact_status(&self) -> &ContactStatus {
        &self.contact_status
    }

    /// Split borrow for rendering the form: texts, editable fields, status
    pub fn contact_parts(&mut self) -> (&I18n, &mut ContactForm, &ContactStatus) {
        (&self.i18n, &mut self.contact_form, &self.contact_status)
    }

    pub fn contact_available(&self) -> bool {
        self.contact_sender.is_some()
    }

    /// Validate and post the contact form in the background
    pub fn submit_contact(&mut self) -> &ContactStatus {
        let Some(sender) = self.contact_sender.as_mut() else {
            self.contact_status = ContactStatus::Unavailable;
            return &self.contact_status;
        };

        match self.contact_form.submission(&self.config.contact.form_name) {
            Ok(submission) => {
                if sender.send(submission) {
                    self.contact_status = ContactStatus::Sending;
                }
            }
            Err(e) => {
                tracing::debug!("Contact form incomplete: {}", e);
                self.contact_status = ContactStatus::Missing;
            }
        }
        &self.contact_status
    }

    /// Pick up a finished submission; returns `true` if the status changed
    pub fn poll_contact(&mut self) -> bool {
        let Some(outcome) = self.contact_sender.as_mut().and_then(|s| s.poll()) else {
            return false;
        };
        self.apply_contact_outcome(outcome);
        true
    }

    /// Block until the in-flight submission finishes
    pub fn wait_contact(&mut self, timeout: std::time::Duration) -> bool {
        let Some(outcome) = self.contact_sender.as_mut().and_then(|s| s.wait(timeout)) else {
            return false;
        };
        self.apply_contact_outcome(outcome);
        true
    }

    fn apply_contact_outcome(&mut self, outcome: SubmitOutcome) {
        match outcome {
            SubmitOutcome::Sent(status) if (200..400).contains(&status) => {
                self.contact_form.clear();
                self.contact_status = ContactStatus::Sent;
            }
            SubmitOutcome::Sent(_) | SubmitOutcome::Failed(_) => {
                self.contact_status = ContactStatus::Failed;
            }
        }
    }

    // ===== Commands =====

    /// Apply a command; returns `true` if the page state changed
    pub fn execute(&mut self, cmd: &Command) -> bool {
        tracing::debug!(command = cmd.id.as_str(), "Execute command");

        match cmd.id.as_str() {
            CommandId::LIGHTBOX_NEXT => self.dispatch_lightbox(LightboxEvent::Next),
            CommandId::LIGHTBOX_PREV => self.dispatch_lightbox(LightboxEvent::Prev),
            CommandId::LIGHTBOX_CLOSE => self.dispatch_lightbox(LightboxEvent::Close),

            CommandId::GALLERY_FILTER => match &cmd.params.string_value {
                Some(id) => {
                    let before = self.filter.active().clone();
                    self.set_filter(id);
                    &before != self.filter.active()
                }
                None => false,
            },
            CommandId::GALLERY_OPEN => match cmd.params.int_value.and_then(|i| usize::try_from(i).ok()) {
                Some(index) => self.open_image(index),
                None => false,
            },

            CommandId::APP_LANGUAGE => {
                let lang = cmd
                    .params
                    .string_value
                    .as_deref()
                    .and_then(|code| code.parse::<Language>().ok());
                match lang {
                    Some(lang) if lang != self.language() => {
                        self.set_language(lang);
                        true
                    }
                    Some(lang) => {
                        // Re-selecting the active language still persists it
                        self.set_language(lang);
                        false
                    }
                    None => false,
                }
            }
            CommandId::APP_SCROLL_TO => {
                match cmd.params.string_value.as_deref().map(str::parse::<Section>) {
                    Some(Ok(section)) => {
                        self.scroll_to(section);
                        true
                    }
                    _ => false,
                }
            }

            // Quitting is the event loop's business
            CommandId::APP_QUIT => false,

            other => {
                tracing::warn!("Unknown command: {}", other);
                false
            }
        }
    }
}
