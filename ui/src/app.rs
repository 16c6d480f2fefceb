use crate::pages::{self, Page};
use crate::state::{Session, State};
use crate::widgets::{self, DeleteChoice};

pub struct KeyraceApp {
    state: State,
}

impl KeyraceApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for KeyraceApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.update(ctx);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                nav_bar(&mut self.state, ui);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.state.page() {
            Page::Results => pages::results_page(&mut self.state, ui),
            Page::Dashboard => pages::dashboard_page(&mut self.state, ui),
            Page::Review => pages::review_page(&mut self.state, ui),
            Page::NotFound => pages::not_found_page(ui),
        });

        if let Some(menu) = &mut self.state.profile_menu {
            match widgets::delete_confirmation(ctx, menu) {
                Some(DeleteChoice::Cancel) => menu.cancel(),
                Some(DeleteChoice::Delete) => self.state.confirm_delete_account(ctx),
                None => {}
            }
        }
    }
}

fn nav_bar(state: &mut State, ui: &mut egui::Ui) {
    ui.strong("Keyrace");
    ui.separator();

    let page = state.page();
    let mut links = vec![("Results", "/results", Page::Results)];
    if state.config.session_token().is_some() {
        links.push(("Dashboard", "/dashboard", Page::Dashboard));
    }
    if state.session.user().is_some_and(|user| user.is_admin()) {
        links.push(("Review", "/review", Page::Review));
    }
    for (label, href, target) in links {
        if ui.selectable_label(page == target, label).clicked() && page != target {
            state.navigate(href);
        }
    }

    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        match &state.session {
            Session::SignedIn(user) => {
                let name = user.name.clone();
                if let Some(menu) = &mut state.profile_menu {
                    widgets::profile_menu(ui, &name, menu);
                }
            }
            Session::Loading => {
                ui.spinner();
            }
            Session::Anonymous => {
                ui.label("Not signed in");
            }
        }
    });
}
