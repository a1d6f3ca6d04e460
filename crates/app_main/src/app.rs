//! Application main loop

use anyhow::Result;
use app_core::{
    AppConfig, Catalog, Command, CommandId, FilePreferenceStore, ImageKey, ImageLoader, ImageName,
    ImageVariant, LightboxEvent, PortfolioState, Section,
};
use app_ui::components::{
    AboutSection, ContactAction, ContactSection, FilterChip, Footer, FooterAction, Gallery,
    GalleryAction, GalleryTile, GalleryView, Header, HeaderAction, Hero, HeroAction, LightboxOverlay,
};
use app_ui::renderer::EguiFrame;
use app_ui::{InputHandler, Renderer, TextureCache, Theme};
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

/// Something the user did during a frame, applied after egui finishes
enum PageAction {
    Header(HeaderAction),
    Hero(HeroAction),
    Gallery(GalleryAction),
    Contact(ContactAction),
    Footer(FooterAction),
    Lightbox(LightboxEvent),
}

/// Main application state for the event loop
struct App {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    egui_ctx: egui::Context,
    egui_state: Option<egui_winit::State>,

    input_handler: InputHandler,
    theme: Theme,

    state: PortfolioState,
    loader: ImageLoader,
    textures: TextureCache,

    /// egui asked for another frame
    repaint: bool,
    /// Page scrolled past the header threshold in the last frame
    page_scrolled: bool,
}

impl App {
    fn new(config: AppConfig, catalog: Catalog) -> Result<Self> {
        let input_handler = InputHandler::new(config.keybindings.clone());
        let theme = Theme::by_name(&config.general.theme);

        let mut state = PortfolioState::new(config, Box::new(FilePreferenceStore::open_default()))?;
        state.load_catalog(catalog, &mut rand::thread_rng());

        Ok(Self {
            window: None,
            renderer: None,
            egui_ctx: egui::Context::default(),
            egui_state: None,

            input_handler,
            theme,

            state,
            loader: ImageLoader::new(),
            textures: TextureCache::new(),

            repaint: true,
            page_scrolled: false,
        })
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let general = &self.state.config().general;
        let window_attrs = Window::default_attributes()
            .with_title(general.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(general.window_width, general.window_height));

        let window = Arc::new(event_loop.create_window(window_attrs)?);

        let renderer = pollster::block_on(Renderer::new(window.clone()))?;

        let egui_state = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            None,
            None,
            None,
        );

        self.theme.apply(&self.egui_ctx);

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.egui_state = Some(egui_state);

        Ok(())
    }

    /// Queue decodes for everything the next frame shows
    fn request_images(&mut self) {
        let gallery = self.state.config().gallery.clone();
        let resources = self.state.resources().clone();
        let resolve = |name: &str| resources.path_of(&resources.src(name));

        for name in [&gallery.hero_image, &gallery.portrait_image] {
            let key = ImageKey::new(name, ImageVariant::Full);
            self.textures.ensure(&mut self.loader, &key, resolve(name), Some(gallery.full_size));
        }
        let key = ImageKey::new(&gallery.watermark_image, ImageVariant::Full);
        self.textures.ensure(&mut self.loader, &key, resolve(&gallery.watermark_image), None);

        for image in self.state.visible_set() {
            let key = ImageKey::new(image.as_str(), ImageVariant::Thumbnail);
            self.textures.ensure(
                &mut self.loader,
                &key,
                resources.file_of(&image),
                Some(gallery.thumbnail_size),
            );
        }

        if let Some(current) = self.state.lightbox().current().cloned() {
            let key = ImageKey::new(current.as_str(), ImageVariant::Full);
            self.textures.ensure(
                &mut self.loader,
                &key,
                resources.file_of(&current),
                Some(gallery.full_size),
            );
        }
    }

    fn render(&mut self) {
        let Some(window) = self.window.clone() else {
            return;
        };
        let Some(egui_state) = &mut self.egui_state else {
            return;
        };

        let raw_input = egui_state.take_egui_input(&window);

        self.textures.pump(&self.egui_ctx, &mut self.loader);
        self.state.poll_contact();
        self.request_images();

        let scroll_target = self.state.take_scroll_target();
        let scroll_enabled = self.state.scroll_enabled();
        let backdrop = self.theme.overlay;
        let header_frame = Header::frame(&self.theme, self.page_scrolled);
        let mut scroll_offset = 0.0_f32;
        let visible: Vec<ImageName> = self.state.visible_set();
        let state = &mut self.state;
        let textures = &self.textures;
        let mut actions: Vec<PageAction> = Vec::new();

        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            let gallery_config = state.config().gallery.clone();
            let full = |name: &str| textures.get(&ImageKey::new(name, ImageVariant::Full));

            egui::TopBottomPanel::top("header")
                .frame(header_frame)
                .show(ctx, |ui| {
                    if let Some(action) = Header::ui(ui, state.i18n()) {
                        actions.push(PageAction::Header(action));
                    }
                });

            egui::CentralPanel::default().show(ctx, |ui| {
                let output = egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .enable_scrolling(scroll_enabled)
                    .show(ui, |ui| {
                        let anchor = |ui: &mut egui::Ui, section: Section, top: egui::Pos2| {
                            if scroll_target == Some(section) {
                                ui.scroll_to_rect(
                                    egui::Rect::from_min_size(top, egui::Vec2::splat(1.0)),
                                    Some(egui::Align::TOP),
                                );
                            }
                        };

                        let top = ui.cursor().min;
                        let hero_height = (ui.available_height() * 0.9).max(Hero::MIN_HEIGHT);
                        if let Some(action) =
                            Hero::ui(ui, state.i18n(), full(&gallery_config.hero_image), hero_height)
                        {
                            actions.push(PageAction::Hero(action));
                        }
                        anchor(ui, Section::Hero, top);

                        let top = ui.cursor().min;
                        let i18n = state.i18n();
                        let view = GalleryView {
                            title: i18n.get("gallery-title"),
                            filters: state
                                .available_filters()
                                .iter()
                                .map(|f| FilterChip {
                                    id: f.id().to_string(),
                                    label: state.filter_label(f),
                                    active: state.active_filter() == f,
                                })
                                .collect(),
                            tiles: visible
                                .iter()
                                .map(|image| GalleryTile {
                                    name: image.as_str(),
                                    slot: textures
                                        .get(&ImageKey::new(image.as_str(), ImageVariant::Thumbnail)),
                                })
                                .collect(),
                            empty_text: i18n.get("gallery-empty"),
                            loading_text: i18n.get("image-loading"),
                            broken_text: i18n.get("image-broken"),
                        };
                        if let Some(action) = Gallery::ui(ui, &view) {
                            actions.push(PageAction::Gallery(action));
                        }
                        anchor(ui, Section::Gallery, top);

                        let top = ui.cursor().min;
                        AboutSection::ui(ui, state.i18n(), full(&gallery_config.portrait_image));
                        anchor(ui, Section::About, top);

                        let top = ui.cursor().min;
                        let (i18n, form, status) = state.contact_parts();
                        if let Some(action) = ContactSection::ui(ui, i18n, form, status) {
                            actions.push(PageAction::Contact(action));
                        }
                        anchor(ui, Section::Contact, top);

                        if let Some(action) = Footer::ui(
                            ui,
                            state.i18n(),
                            &state.config().links,
                            full(&gallery_config.watermark_image),
                        ) {
                            actions.push(PageAction::Footer(action));
                        }
                    });
                scroll_offset = output.state.offset.y;
            });

            let current = state
                .lightbox()
                .current()
                .and_then(|image| full(image.as_str()));
            if let Some(event) = LightboxOverlay::show(ctx, state.lightbox(), current, state.i18n(), backdrop) {
                actions.push(PageAction::Lightbox(event));
            }
        });

        let scrolled = Header::is_scrolled(scroll_offset);
        if scrolled != self.page_scrolled {
            self.page_scrolled = scrolled;
            self.repaint = true;
        }

        if let Some(egui_state) = &mut self.egui_state {
            egui_state.handle_platform_output(&window, full_output.platform_output);
        }

        self.repaint = full_output
            .viewport_output
            .get(&egui::ViewportId::ROOT)
            .map(|v| v.repaint_delay.is_zero())
            .unwrap_or(false);

        for action in actions {
            self.apply(action);
        }

        let primitives = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        if let Some(renderer) = &mut self.renderer {
            renderer.render(
                EguiFrame {
                    primitives: &primitives,
                    textures_delta: &full_output.textures_delta,
                    pixels_per_point: full_output.pixels_per_point,
                },
                self.theme.background,
            );
        }
    }

    fn apply(&mut self, action: PageAction) {
        let changed = match action {
            PageAction::Header(HeaderAction::ScrollTo(section)) => self
                .state
                .execute(&Command::new(CommandId::APP_SCROLL_TO).with_string(section.id())),
            PageAction::Header(HeaderAction::SetLanguage(lang)) => self
                .state
                .execute(&Command::new(CommandId::APP_LANGUAGE).with_string(lang.code())),
            PageAction::Hero(HeroAction::ViewGallery) => self
                .state
                .execute(&Command::new(CommandId::APP_SCROLL_TO).with_string(Section::Gallery.id())),
            PageAction::Gallery(GalleryAction::SetFilter(id)) => self
                .state
                .execute(&Command::new(CommandId::GALLERY_FILTER).with_string(&id)),
            PageAction::Gallery(GalleryAction::Open(index)) => self
                .state
                .execute(&Command::new(CommandId::GALLERY_OPEN).with_int(index as i64)),
            PageAction::Contact(ContactAction::Submit) => {
                self.state.submit_contact();
                true
            }
            PageAction::Footer(FooterAction::OpenLink(url)) => {
                if let Err(e) = open::that(&url) {
                    tracing::warn!(url = %url, "Failed to open link: {}", e);
                }
                false
            }
            PageAction::Lightbox(event) => self.state.dispatch_lightbox(event),
        };

        if changed {
            self.repaint = true;
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init_window(event_loop) {
                tracing::error!("Failed to initialize window: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let (Some(egui_state), Some(window)) = (&mut self.egui_state, &self.window) {
            let response = egui_state.on_window_event(window, &event);
            if response.repaint {
                window.request_redraw();
            }
            if response.consumed {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Close requested");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize((size.width, size.height));
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                // Only keys bound in the live scope resolve to a command
                if let Some(cmd) = self.input_handler.handle_key(&event, self.state.key_scope()) {
                    if cmd.is(CommandId::APP_QUIT) {
                        event_loop.exit();
                        return;
                    }
                    if self.state.execute(&cmd) {
                        self.repaint = true;
                    }
                }
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.input_handler.update_modifiers(modifiers.state());
            }

            WindowEvent::RedrawRequested => {
                self.render();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Keep drawing while decodes or a submission are outstanding
        let busy = self.loader.has_pending()
            || *self.state.contact_status() == app_core::ContactStatus::Sending;

        if self.repaint || busy {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
        if busy {
            event_loop.set_control_flow(ControlFlow::wait_duration(std::time::Duration::from_millis(50)));
        } else {
            event_loop.set_control_flow(ControlFlow::Wait);
        }
    }
}

/// Run the application
pub fn run(config: AppConfig, catalog: Catalog) -> Result<()> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config, catalog)?;
    event_loop.run_app(&mut app)?;

    Ok(())
}
