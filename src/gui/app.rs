// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::{
        consts::APP_TITLE,
        options::PageKind,
        state::{AppState, Notice, PageState},
    },
    errors::AppResult,
    store::Store,
};

use super::{
    components,
    pages::Page,
    router,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
}

impl App {
    pub fn new(state: AppState) -> Self {
        // Create the database file and tables up front.
        match Store::open(&state.options.db_path) {
            Ok(_) => logf!("Init: store ready at {}", state.options.db_path.display()),
            Err(e) => loge!("Init: store unavailable: {}", e),
        }

        let mut app = Self { state };
        let page = app.current_page();
        logf!("Init: default page={:?}", page.kind());
        page.on_enter(&mut app);
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::all_pages()[self.current_index()] }

    /// Widget state of the page on screen.
    #[inline]
    pub fn page(&mut self) -> &mut PageState { &mut self.state.gui.page }

    /// Move to another sidebar entry. Everything the old page held is dropped.
    pub fn switch_to(&mut self, idx: usize) {
        if idx == self.current_index() || idx >= router::all_pages().len() {
            return;
        }
        let prev = self.current_page_kind();
        self.state.gui.current_page_index = idx;
        self.state.gui.page = PageState::default();

        let page = self.current_page();
        logf!("UI: Page switch {:?} → {:?}", prev, page.kind());
        page.on_enter(self);
    }

    pub fn notice_ok<T: Into<String>>(&mut self, msg: T) {
        self.page().notice = Some(Notice::Success(msg.into()));
    }

    pub fn notice_err<T: std::fmt::Display>(&mut self, err: T) {
        loge!("{:?}: {}", self.current_page_kind(), err);
        self.page().notice = Some(Notice::Error(err.to_string()));
    }

    /// Open the store for one operation, run `f`, close it again.
    /// Errors are logged and put on screen; the caller just sees `None`.
    pub fn with_store<T>(&mut self, f: impl FnOnce(&Store) -> AppResult<T>) -> Option<T> {
        let res = Store::open(&self.state.options.db_path).and_then(|store| f(&store));
        match res {
            Ok(v) => Some(v),
            Err(e) => {
                self.notice_err(e);
                None
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("nav")
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                components::sidebar::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let page = self.current_page();
            ui.heading(page.title());
            ui.separator();

            egui::ScrollArea::vertical()
                .id_salt(("page", page.kind()))
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    page.draw(ui, self);
                    components::notice::draw(ui, self.state.gui.page.notice.as_ref());
                });
        });
    }
}
