use eframe::{App as EguiApp, Frame};
use eframe::egui::{CentralPanel, Color32, Context, Image, RichText, ScrollArea, SidePanel, Ui, Vec2};
use tracing::{debug, info};
use crate::app::color_select::*;
use crate::app::text_input::*;
use crate::color::ShirtColor;
use crate::constants::*;
use crate::form::FormState;
use crate::preview::PreviewConfig;

pub struct App {
    form: FormState,
    config: PreviewConfig,

    // edit buffers bound to the text fields
    name: String,
    number: String,

    preview_url: String,
    // previous preview URIs still held by the image loaders
    stale_urls: Vec<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(PreviewConfig::default())
    }
}

impl EguiApp for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.forget_stale_previews(ctx);

        SidePanel::left("side_panel")
            .exact_width(GUI_SIDEBAR_WIDTH)
            .resizable(false)
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    self.side_panel_content(ui);
                });
            });

        CentralPanel::default()
            .show(ctx, |ui| {
                self.central_panel_content(ui);
            });
    }
}

impl App {
    pub fn new(config: PreviewConfig) -> Self {
        let form = FormState::default();
        let preview_url = form.preview_url(&config);
        info!(cloud = %config.cloud_name, image = %config.base_image, "t-shirt designer ready");

        Self {
            name: form.name().to_string(),
            number: form.number().to_string(),
            form,
            config,
            preview_url,
            stale_urls: Vec::new(),
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn preview_url(&self) -> &str {
        &self.preview_url
    }

    pub fn change_name(&mut self, name: &str) {
        self.form.set_name(name);
        self.name = self.form.name().to_string();
        self.refresh_preview();
    }

    pub fn change_number(&mut self, number: &str) {
        self.form.set_number(number);
        self.number = self.form.number().to_string();
        self.refresh_preview();
    }

    pub fn change_color(&mut self, color: ShirtColor) {
        self.form.set_color(color);
        self.refresh_preview();
    }

    pub fn stale_urls(&self) -> &[String] {
        &self.stale_urls
    }

    fn refresh_preview(&mut self) {
        let url = self.form.preview_url(&self.config);
        if url == self.preview_url {
            return;
        }

        let old = std::mem::replace(&mut self.preview_url, url);
        if !old.is_empty() && !self.stale_urls.contains(&old) {
            self.stale_urls.push(old);
        }
    }

    /// Drops cached bytes and textures for previews that are no longer shown.
    fn forget_stale_previews(&mut self, ctx: &Context) {
        for url in self.stale_urls.drain(..) {
            debug!(%url, "forgetting stale preview");
            ctx.forget_image(&url);
        }
    }

    pub fn side_panel_content(&mut self, ui: &mut Ui) {
        ui.heading("Customize Your T-Shirt");
        ui.separator();

        let errors = self.form.errors();

        let mut name = self.name.clone();
        if text_input(ui, "Name (Max 35 characters):", &mut name, NAME_MAX_CHARS, &errors.name_message()) {
            self.change_name(&name);
        }

        let mut number = self.number.clone();
        if text_input(ui, "Number:", &mut number, usize::MAX, &errors.number_message()) {
            self.change_number(&number);
        }

        let mut color = self.form.color();
        if color_select(ui, "Color:", &mut color) {
            self.change_color(color);
        }
    }

    pub fn central_panel_content(&mut self, ui: &mut Ui) {
        ui.add_space(GUI_PREVIEW_PADDING);
        ui.vertical_centered(|ui| {
            if self.preview_url.is_empty() {
                ui.label(RichText::new(PREVIEW_PLACEHOLDER).color(Color32::GRAY));
            } else {
                ui.add(Image::from_uri(self.preview_url.clone())
                    .fit_to_exact_size(Vec2::splat(GUI_PREVIEW_SIZE)));
            }
        });
    }
}
