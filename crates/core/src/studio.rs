//! The studio facade hosts drive.
//!
//! A `Studio` owns the form state, the page tree the preview lives in and the
//! collaborators that turn the preview into files. Every mutating operation
//! re-renders the preview from state before returning.

use crate::config::StudioConfig;
use crate::error::{ExportError, StudioError};
use crate::export::{CaptureTicket, ExportKind, ExportScope, encode_png, export_filename};
use crate::logo::logo_data_uri;
use crate::page::{DEBUG_CLASS, PREVIEW_CLASS, TOAST_ID, build_page, preview_selector};
use crate::persist::{ImportPatch, PersistedDocument};
use crate::render::{apply_layout, apply_template, apply_theme_variables, render_fields};
use crate::state::{AppState, ColorRole, Field, FormState, parse_date};
use chrono::{DateTime, NaiveDate, Utc};
use placard_catalog::Catalog;
use placard_dom::{Document, DomError, Element, Selector};
use placard_render_core::{DocumentAssembler, PrintableContext, PrintableRenderer};
use placard_render_lopdf::LopdfAssembler;
use placard_traits::{
    CaptureError, Download, DownloadSink, InMemoryDownloads, InMemoryPrintTarget, LogNotifier,
    Notifier, PrintTarget, RasterImage, Rasterizer, Toast, ToastKind,
};
use placard_types::{Color, Language, Palette};
use std::fmt;
use std::sync::Arc;

const JSON_SAVED: &str = "Announcement data saved successfully!";
const JSON_SAVE_FAILED: &str = "Error saving data. Please try again.";
const IMPORT_DONE: &str = "Data loaded successfully!";
const IMPORT_FAILED: &str = "Error applying imported data. Please try again.";
const PRINT_FAILED: &str = "Error creating printable version. Please try again.";

type Clock = Box<dyn Fn() -> DateTime<Utc>>;

pub struct Studio {
    catalog: Arc<Catalog>,
    config: StudioConfig,
    state: AppState,
    page: Document,
    rasterizer: Option<Box<dyn Rasterizer>>,
    assembler: Box<dyn DocumentAssembler>,
    downloads: Box<dyn DownloadSink>,
    print_target: Box<dyn PrintTarget>,
    notifier: Box<dyn Notifier>,
    printable: PrintableRenderer,
    clock: Clock,
}

impl fmt::Debug for Studio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Studio")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("rasterizer", &self.rasterizer.as_ref().map(|r| r.name()))
            .field("assembler", &self.assembler)
            .finish_non_exhaustive()
    }
}

impl Studio {
    pub fn builder() -> StudioBuilder {
        StudioBuilder::new()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn form(&self) -> &FormState {
        &self.state.form
    }

    pub fn page(&self) -> &Document {
        &self.page
    }

    /// Direct access for hosts that patch the page. The next render
    /// reconciles template, layout and fields again.
    pub fn page_mut(&mut self) -> &mut Document {
        &mut self.page
    }

    pub fn is_exporting(&self) -> bool {
        self.state.export_in_flight
    }

    pub fn preview(&self) -> Result<&Element, StudioError> {
        self.page
            .query(&preview_selector())
            .ok_or_else(|| DomError::NotFound(format!(".{}", PREVIEW_CLASS)).into())
    }

    /// The preview element serialized as HTML.
    pub fn preview_html(&self) -> Result<String, StudioError> {
        Ok(self.preview()?.to_html())
    }

    /// Re-renders the preview and page variables from the current state.
    pub fn render(&mut self) -> Result<(), StudioError> {
        apply_theme_variables(&mut self.page.root_style, &self.state.form.colors);

        let form = &self.state.form;
        let template = self.catalog.resolve_template(form.template.as_str());
        let layout = self.catalog.resolve_layout(form.layout.as_str());
        let preview = self
            .page
            .query_mut(&preview_selector())
            .ok_or_else(|| DomError::NotFound(format!(".{}", PREVIEW_CLASS)))?;

        let previous = self.state.applied_template.as_ref();
        let applied = apply_template(preview, &self.catalog, template, previous);
        self.state.applied_template = Some(applied);
        apply_layout(preview, &self.catalog, layout, &form.content);
        render_fields(preview, form, &self.config)?;
        Ok(())
    }

    pub fn set_field(&mut self, field: Field, value: &str) -> Result<(), StudioError> {
        if field == Field::Date && !value.trim().is_empty() && parse_date(value).is_none() {
            return Err(StudioError::field(
                field.key(),
                format!("expected YYYY-MM-DD, got '{}'", value),
            ));
        }
        self.state.form.set(field, value);
        self.render()
    }

    /// Sets one palette color from a `#RGB` / `#RRGGBB` string.
    pub fn set_color(&mut self, role: ColorRole, value: &str) -> Result<(), StudioError> {
        let color = Color::parse_hex(value)
            .map_err(|e| StudioError::field(&format!("colors.{}", role.key()), e.to_string()))?;
        *role.slot(&mut self.state.form.colors) = color;
        self.render()
    }

    pub fn set_colors(&mut self, palette: Palette) -> Result<(), StudioError> {
        self.state.form.colors = palette;
        self.render()
    }

    pub fn set_language(&mut self, language: Language) -> Result<(), StudioError> {
        self.state.form.language = language;
        self.render()
    }

    /// Switches template and adopts its palette. A preset's notice label does
    /// not survive an explicit template choice.
    pub fn select_template(&mut self, id: &str) -> Result<(), StudioError> {
        let template = self
            .catalog
            .template(id)
            .ok_or_else(|| StudioError::UnknownTemplate(id.to_string()))?;
        if template.premium && !self.config.premium_enabled {
            return Err(StudioError::PremiumRequired { registry: "template", id: id.to_string() });
        }
        log::debug!("Selecting template '{}'", id);
        let form = &mut self.state.form;
        form.template = template.id.clone();
        form.colors = template.colors.clone();
        form.notice_type = None;
        self.render()
    }

    pub fn select_layout(&mut self, id: &str) -> Result<(), StudioError> {
        let layout = self
            .catalog
            .layout(id)
            .ok_or_else(|| StudioError::UnknownLayout(id.to_string()))?;
        if layout.premium && !self.config.premium_enabled {
            return Err(StudioError::PremiumRequired { registry: "layout", id: id.to_string() });
        }
        log::debug!("Selecting layout '{}'", id);
        self.state.form.layout = layout.id.clone();
        self.render()
    }

    /// Replaces the palette with a color theme's colors.
    pub fn apply_theme(&mut self, id: &str) -> Result<(), StudioError> {
        let theme = self
            .catalog
            .theme(id)
            .ok_or_else(|| StudioError::UnknownTheme(id.to_string()))?;
        log::debug!("Applying color theme '{}'", id);
        self.state.form.colors = theme.colors.clone();
        self.render()
    }

    /// Fills the form from a preset, switching to its template when it names one.
    pub fn load_preset(&mut self, id: &str) -> Result<(), StudioError> {
        let preset = self
            .catalog
            .preset(id)
            .ok_or_else(|| StudioError::UnknownPreset(id.to_string()))?;
        log::debug!("Loading preset '{}'", id);

        let template = match &preset.template {
            Some(tid) => match self.catalog.template(tid.as_str()) {
                Some(t) if t.premium && !self.config.premium_enabled => {
                    log::warn!(
                        "Preset '{}' names premium template '{}'; keeping the current one",
                        id,
                        tid
                    );
                    None
                }
                found => found,
            },
            None => None,
        };

        let form = &mut self.state.form;
        form.title = preset.title.clone();
        form.content = preset.content.clone();
        if let Some(name) = &preset.signer_name {
            form.signer_name = name.clone();
        }
        if let Some(title) = &preset.signer_title {
            form.signer_title = title.clone();
        }
        if let Some(template) = template {
            form.template = template.id.clone();
            form.colors = template.colors.clone();
        }
        form.notice_type = preset.notice_type.clone();
        self.render()
    }

    pub fn upload_logo(&mut self, bytes: &[u8], mime: &str) -> Result<(), StudioError> {
        let uri = logo_data_uri(bytes, mime)?;
        log::debug!("Logo loaded ({} bytes, {})", bytes.len(), mime);
        self.state.form.logo_image = Some(uri);
        self.state.logo_loaded = true;
        self.render()
    }

    pub fn clear_logo(&mut self) -> Result<(), StudioError> {
        self.state.form.logo_image = None;
        self.state.logo_loaded = false;
        self.render()
    }

    /// Restores every field to its default and re-renders.
    pub fn reset(&mut self) -> Result<(), StudioError> {
        self.state.form = FormState::new(self.today());
        self.state.logo_loaded = false;
        log::info!("Studio reset to defaults");
        self.render()
    }

    /// Captures the preview and downloads it as PNG.
    pub fn export_png(&mut self) -> Result<Download, StudioError> {
        self.export_capture(ExportKind::Png)
    }

    /// Captures the preview and downloads it as a one-page PDF.
    pub fn export_pdf(&mut self) -> Result<Download, StudioError> {
        self.export_capture(ExportKind::Pdf)
    }

    fn export_capture(&mut self, kind: ExportKind) -> Result<Download, StudioError> {
        let date = self.today();
        let result = (|| -> Result<Download, ExportError> {
            let scope = ExportScope::enter(&mut self.page, &mut self.state.export_in_flight)?;
            let rasterizer = self.rasterizer.as_deref().ok_or(ExportError::NoRasterizer)?;
            let preview = scope
                .page()
                .query(&preview_selector())
                .ok_or_else(|| ExportError::MissingElement(format!(".{}", PREVIEW_CLASS)))?;
            log::debug!("Capturing preview with {} for {:?} export", rasterizer.name(), kind);
            let image = rasterizer.capture(preview, &self.config.capture)?;
            let download =
                encode_export(kind, &image, self.assembler.as_ref(), &self.config, date)?;
            self.downloads.deliver(download.clone())?;
            Ok(download)
        })();
        self.finish(result, kind.success_message(), kind.failure_message())
    }

    /// Starts an export whose pixels the host captures asynchronously. The
    /// studio stays busy, with overlays hidden, until the ticket is completed
    /// or aborted.
    pub fn begin_capture(&mut self, kind: ExportKind) -> Result<CaptureTicket, StudioError> {
        let scope = ExportScope::enter(&mut self.page, &mut self.state.export_in_flight)
            .map_err(|e| {
                log::warn!("Rejected {:?} export: {}", kind, e);
                StudioError::from(e)
            })?;
        log::debug!("Waiting on host capture for {:?} export", kind);
        Ok(scope.suspend(kind))
    }

    /// Encodes and delivers the host's capture, then releases the studio.
    pub fn complete_capture(
        &mut self,
        ticket: CaptureTicket,
        image: RasterImage,
    ) -> Result<Download, StudioError> {
        let kind = ticket.kind();
        let date = self.today();
        let result = {
            let _scope =
                ExportScope::resume(&mut self.page, &mut self.state.export_in_flight, ticket);
            encode_export(kind, &image, self.assembler.as_ref(), &self.config, date).and_then(
                |download| {
                    self.downloads.deliver(download.clone())?;
                    Ok(download)
                },
            )
        };
        self.finish(result, kind.success_message(), kind.failure_message())
    }

    /// Releases the studio after the host failed to capture. Returns the
    /// reported error.
    pub fn abort_capture(&mut self, ticket: CaptureTicket, reason: &str) -> StudioError {
        let kind = ticket.kind();
        drop(ExportScope::resume(&mut self.page, &mut self.state.export_in_flight, ticket));
        let failure = ExportError::Capture(CaptureError::Failed(reason.to_string()));
        match self.finish::<()>(Err(failure), kind.success_message(), kind.failure_message()) {
            Err(err) => err,
            Ok(()) => StudioError::Export(ExportError::Capture(CaptureError::Failed(
                reason.to_string(),
            ))),
        }
    }

    /// The saved-document JSON for the current form.
    pub fn snapshot_json(&self) -> Result<String, StudioError> {
        let document = PersistedDocument::from_form(&self.state.form, (self.clock)());
        Ok(document.to_json_pretty().map_err(ExportError::from)?)
    }

    pub fn export_json(&mut self) -> Result<Download, StudioError> {
        let filename = export_filename(&self.config.filename_prefix, self.today(), "json");
        let result = PersistedDocument::from_form(&self.state.form, (self.clock)())
            .to_json_pretty()
            .map_err(ExportError::from)
            .and_then(|json| {
                let download = Download::new(filename, "application/json", json.into_bytes());
                self.downloads.deliver(download.clone())?;
                Ok(download)
            });
        self.finish(result, JSON_SAVED, JSON_SAVE_FAILED)
    }

    /// Applies a saved document. Nothing changes unless the whole document is valid.
    pub fn import_json(&mut self, json: &str) -> Result<(), StudioError> {
        let patch = match ImportPatch::parse(json) {
            Ok(patch) => patch,
            Err(err) => return Err(self.import_failed(err.into())),
        };

        let previous = self.state.form.clone();
        patch.apply(&mut self.state.form, &self.catalog, self.config.premium_enabled);
        if let Err(err) = self.render() {
            self.state.form = previous;
            if let Err(restore) = self.render() {
                log::error!("Failed to restore preview after import: {}", restore);
            }
            return Err(self.import_failed(err));
        }

        log::info!(
            "Imported document (template '{}', layout '{}')",
            self.state.form.template,
            self.state.form.layout
        );
        self.toast(Toast::success(IMPORT_DONE, self.config.toast_duration_ms));
        Ok(())
    }

    fn import_failed(&mut self, err: StudioError) -> StudioError {
        log::error!("Import failed: {}", err);
        self.toast(Toast::error(IMPORT_FAILED, self.config.toast_duration_ms));
        err
    }

    /// The standalone print document: the preview without debug overlays,
    /// with the page styles and current theme variables inlined.
    pub fn printable_html(&self) -> Result<String, StudioError> {
        let mut preview = self.preview()?.clone();
        preview.remove_matching(&Selector::class(DEBUG_CLASS));
        let context = PrintableContext::new(self.page.collected_styles(), preview.to_html());
        Ok(self.printable.render(&context)?)
    }

    /// Opens the printable document through the print target.
    pub fn print(&mut self) -> Result<(), StudioError> {
        let result = self.printable_html().and_then(|html| {
            self.print_target.open(&html)?;
            Ok(())
        });
        match result {
            Ok(()) => {
                log::debug!("Opened printable document");
                Ok(())
            }
            Err(err) => {
                log::error!("Print failed: {}", err);
                let message = match &err {
                    StudioError::Export(ExportError::Delivery(
                        blocked @ placard_traits::DeliveryError::PopupBlocked,
                    )) => blocked.to_string(),
                    _ => PRINT_FAILED.to_string(),
                };
                self.toast(Toast::error(message, self.config.toast_duration_ms));
                Err(err)
            }
        }
    }

    fn finish<T>(
        &mut self,
        result: Result<T, ExportError>,
        success: &str,
        failure: &str,
    ) -> Result<T, StudioError> {
        match result {
            Ok(value) => {
                self.toast(Toast::success(success, self.config.toast_duration_ms));
                Ok(value)
            }
            Err(ExportError::Busy) => {
                log::warn!("Export rejected: another export is in progress");
                Err(ExportError::Busy.into())
            }
            Err(err) => {
                log::error!("{} ({})", failure, err);
                self.toast(Toast::error(failure, self.config.toast_duration_ms));
                Err(err.into())
            }
        }
    }

    /// Shows a toast in the page and forwards it to the notifier.
    fn toast(&mut self, toast: Toast) {
        if let Some(el) = self.page.element_by_id_mut(TOAST_ID) {
            el.set_text(&toast.message);
            el.toggle_class("show", true);
            el.toggle_class("success", toast.kind == ToastKind::Success);
            el.toggle_class("error", toast.kind == ToastKind::Error);
        }
        self.notifier.notify(toast);
    }

    fn today(&self) -> NaiveDate {
        (self.clock)().date_naive()
    }
}

fn encode_export(
    kind: ExportKind,
    image: &RasterImage,
    assembler: &dyn DocumentAssembler,
    config: &StudioConfig,
    date: NaiveDate,
) -> Result<Download, ExportError> {
    let (bytes, mime, extension) = match kind {
        ExportKind::Png => (encode_png(image)?, kind.mime_type(), kind.extension()),
        ExportKind::Pdf => (
            assembler.assemble(image, &config.page)?,
            assembler.mime_type(),
            assembler.extension(),
        ),
    };
    let filename = export_filename(&config.filename_prefix, date, extension);
    log::info!("Encoded {} ({} bytes)", filename, bytes.len());
    Ok(Download::new(filename, mime, bytes))
}

/// Builds a [`Studio`]. Every collaborator has a default, so
/// `Studio::builder().build()` gives a studio with the builtin catalog,
/// in-memory downloads and print target, a logging notifier and no rasterizer.
pub struct StudioBuilder {
    catalog: Option<Arc<Catalog>>,
    config: StudioConfig,
    rasterizer: Option<Box<dyn Rasterizer>>,
    assembler: Box<dyn DocumentAssembler>,
    downloads: Box<dyn DownloadSink>,
    print_target: Box<dyn PrintTarget>,
    notifier: Box<dyn Notifier>,
    clock: Clock,
}

impl Default for StudioBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StudioBuilder {
    pub fn new() -> Self {
        Self {
            catalog: None,
            config: StudioConfig::default(),
            rasterizer: None,
            assembler: Box::new(LopdfAssembler::new()),
            downloads: Box::new(InMemoryDownloads::new()),
            print_target: Box::new(InMemoryPrintTarget::new()),
            notifier: Box::new(LogNotifier),
            clock: Box::new(Utc::now),
        }
    }

    pub fn with_catalog(mut self, catalog: Arc<Catalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn with_config(mut self, config: StudioConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_rasterizer(mut self, rasterizer: impl Rasterizer + 'static) -> Self {
        self.rasterizer = Some(Box::new(rasterizer));
        self
    }

    pub fn with_assembler(mut self, assembler: impl DocumentAssembler + 'static) -> Self {
        self.assembler = Box::new(assembler);
        self
    }

    pub fn with_downloads(mut self, downloads: impl DownloadSink + 'static) -> Self {
        self.downloads = Box::new(downloads);
        self
    }

    pub fn with_print_target(mut self, target: impl PrintTarget + 'static) -> Self {
        self.print_target = Box::new(target);
        self
    }

    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    /// Replaces the wall clock used for today's date and export timestamps.
    pub fn with_clock(mut self, clock: impl Fn() -> DateTime<Utc> + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn build(self) -> Result<Studio, StudioError> {
        self.config.validate()?;
        let catalog = match self.catalog {
            Some(catalog) => catalog,
            None => Catalog::builtin()?,
        };
        let today = (self.clock)().date_naive();

        let mut studio = Studio {
            catalog,
            config: self.config,
            state: AppState::new(today),
            page: build_page(),
            rasterizer: self.rasterizer,
            assembler: self.assembler,
            downloads: self.downloads,
            print_target: self.print_target,
            notifier: self.notifier,
            printable: PrintableRenderer::new()?,
            clock: self.clock,
        };
        studio.render()?;
        log::info!(
            "Studio ready: {} templates, {} layouts, {} themes, {} presets",
            studio.catalog.templates().len(),
            studio.catalog.layouts().len(),
            studio.catalog.themes().len(),
            studio.catalog.presets().len()
        );
        Ok(studio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{CONTENT_ID, LOADING_CLASS, HIDDEN_CLASS, NOTICE_TYPE_ID, TITLE_ID};
    use chrono::TimeZone;
    use placard_traits::{InMemoryNotifier, StaticRasterizer};

    fn clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap()
    }

    struct Harness {
        studio: Studio,
        downloads: InMemoryDownloads,
        notifier: InMemoryNotifier,
    }

    fn harness(config: StudioConfig) -> Harness {
        let _ = env_logger::builder().is_test(true).try_init();
        let downloads = InMemoryDownloads::new();
        let notifier = InMemoryNotifier::new();
        let image = RasterImage::filled(4, 6, [255, 255, 255, 255]).unwrap();
        let studio = Studio::builder()
            .with_config(config)
            .with_rasterizer(StaticRasterizer::new(image))
            .with_downloads(downloads.clone())
            .with_notifier(notifier.clone())
            .with_clock(clock)
            .build()
            .unwrap();
        Harness { studio, downloads, notifier }
    }

    fn text(studio: &Studio, id: &str) -> String {
        studio.page().element_by_id(id).unwrap().text_content()
    }

    #[test]
    fn build_renders_defaults() {
        let h = harness(StudioConfig::default());
        let preview = h.studio.preview().unwrap();
        assert!(preview.has_class("template-standard"));
        assert_eq!(h.studio.form().date, "2026-10-17");
        assert_eq!(h.studio.page().root_style.get("--primary-color"), Some("#2a3b4c"));
    }

    #[test]
    fn select_template_adopts_palette_and_clears_label() {
        let mut h = harness(StudioConfig::default());
        h.studio.load_preset("event").unwrap();
        assert_eq!(text(&h.studio, NOTICE_TYPE_ID), "EVENT");
        h.studio.select_template("formal").unwrap();
        assert_eq!(text(&h.studio, NOTICE_TYPE_ID), "FORMAL");
        assert_eq!(h.studio.form().colors.primary.to_hex(), "#1a2c3f");
        assert_eq!(h.studio.page().root_style.get("--primary-color"), Some("#1a2c3f"));
    }

    #[test]
    fn unknown_and_premium_selections_are_rejected() {
        let config = StudioConfig { premium_enabled: false, ..StudioConfig::default() };
        let mut h = harness(config);
        assert!(matches!(
            h.studio.select_template("hologram"),
            Err(StudioError::UnknownTemplate(_))
        ));
        assert!(matches!(
            h.studio.select_template("neon"),
            Err(StudioError::PremiumRequired { registry: "template", .. })
        ));
        assert!(matches!(
            h.studio.select_layout("hero"),
            Err(StudioError::PremiumRequired { registry: "layout", .. })
        ));
        assert!(matches!(h.studio.apply_theme("plaid"), Err(StudioError::UnknownTheme(_))));
        assert_eq!(h.studio.form().template, "standard");
    }

    #[test]
    fn set_field_validates_dates() {
        let mut h = harness(StudioConfig::default());
        h.studio.set_field(Field::Title, "Holiday").unwrap();
        assert_eq!(text(&h.studio, TITLE_ID), "Holiday");
        assert!(matches!(
            h.studio.set_field(Field::Date, "next week"),
            Err(StudioError::InvalidField { .. })
        ));
        assert_eq!(h.studio.form().date, "2026-10-17");
    }

    #[test]
    fn png_export_delivers_dated_file_and_toasts() {
        let mut h = harness(StudioConfig { debug: true, ..StudioConfig::default() });
        let download = h.studio.export_png().unwrap();
        assert_eq!(download.filename, "announcement-2026-10-17.png");
        assert_eq!(download.mime, "image/png");
        assert_eq!(h.downloads.len(), 1);
        let toast = h.notifier.last().unwrap();
        assert_eq!(toast.message, "Image downloaded successfully!");
        assert!(!h.studio.is_exporting());
        let overlay = h.studio.page().query(&Selector::class(DEBUG_CLASS)).unwrap();
        assert_eq!(overlay.style.get("display"), None);
        let toast_el = h.studio.page().element_by_id(TOAST_ID).unwrap();
        assert!(toast_el.has_class("show"));
    }

    #[test]
    fn export_without_rasterizer_fails_cleanly() {
        let notifier = InMemoryNotifier::new();
        let mut studio = Studio::builder()
            .with_notifier(notifier.clone())
            .with_clock(clock)
            .build()
            .unwrap();
        let err = studio.export_pdf().unwrap_err();
        assert!(matches!(err, StudioError::Export(ExportError::NoRasterizer)));
        assert_eq!(notifier.last().unwrap().message, "Error generating PDF. Please try again.");
        assert!(!studio.is_exporting());
        let loading = studio.page().query(&Selector::class(LOADING_CLASS)).unwrap();
        assert!(loading.has_class(HIDDEN_CLASS));
    }

    #[test]
    fn pending_capture_blocks_other_exports() {
        let mut h = harness(StudioConfig::default());
        let ticket = h.studio.begin_capture(ExportKind::Pdf).unwrap();
        assert!(h.studio.is_exporting());
        assert!(h.studio.export_png().unwrap_err().is_busy());
        assert!(h.studio.begin_capture(ExportKind::Png).unwrap_err().is_busy());

        let image = RasterImage::filled(10, 20, [0, 0, 0, 255]).unwrap();
        let download = h.studio.complete_capture(ticket, image).unwrap();
        assert_eq!(download.filename, "announcement-2026-10-17.pdf");
        assert!(download.bytes.starts_with(b"%PDF-"));
        assert!(!h.studio.is_exporting());
    }

    #[test]
    fn aborted_capture_reports_and_releases() {
        let mut h = harness(StudioConfig::default());
        let ticket = h.studio.begin_capture(ExportKind::Png).unwrap();
        let err = h.studio.abort_capture(ticket, "canvas tainted");
        assert!(matches!(err, StudioError::Export(ExportError::Capture(_))));
        assert!(h.notifier.last().unwrap().is_error());
        assert!(!h.studio.is_exporting());
    }

    #[test]
    fn failed_import_leaves_state_untouched() {
        let mut h = harness(StudioConfig::default());
        h.studio.set_field(Field::Title, "Keep me").unwrap();
        let before = h.studio.form().clone();
        assert!(h.studio.import_json(r#"{"title": "New", "colors": {"accent": 7}}"#).is_err());
        assert_eq!(h.studio.form(), &before);
        assert_eq!(h.notifier.last().unwrap().message, IMPORT_FAILED);
    }

    #[test]
    fn printable_html_drops_debug_overlay() {
        let target = InMemoryPrintTarget::new();
        let mut studio = Studio::builder()
            .with_config(StudioConfig { debug: true, ..StudioConfig::default() })
            .with_print_target(target.clone())
            .with_clock(clock)
            .build()
            .unwrap();
        studio.print().unwrap();
        let html = &target.opened()[0];
        assert!(!html.contains("class=\"debug-info\""));
        assert!(html.contains("--primary-color: #2a3b4c;"));
        assert!(html.contains(CONTENT_ID));
    }

    #[test]
    fn blocked_popup_is_reported() {
        let notifier = InMemoryNotifier::new();
        let mut studio = Studio::builder()
            .with_print_target(InMemoryPrintTarget::blocked())
            .with_notifier(notifier.clone())
            .with_clock(clock)
            .build()
            .unwrap();
        assert!(studio.print().is_err());
        assert_eq!(
            notifier.last().unwrap().message,
            "Popup blocked. Please allow popups for this site."
        );
    }
}
