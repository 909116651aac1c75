use crate::about;
use crate::menu::{Course, MenuItem, MenuItemId};
use crate::state::State;
use crate::util::format_price;
use crate::{ChefMenu, INITIAL_WIDTH, PROGRAM_TITLE};
use eframe::egui::{self, Color32, Context, RichText, ScrollArea, Ui};

const REMOVE_COLOR: Color32 = Color32::from_rgb(255, 0, 0);
const BUTTON_COLOR: Color32 = Color32::BLACK;
const FIELD_WIDTH: f32 = 300.0;

impl ChefMenu {
    // --- Button/Action Handlers ---

    // Submit the manage form; a rejected dish opens the alert
    pub fn handle_add_item(&mut self) {
        if let Err(e) = self.form.submit(&mut self.store) {
            self.show_alert(e.to_string());
        }
    }

    pub fn handle_remove_item(&mut self, id: &MenuItemId) {
        if self.store.remove(id).is_none() {
            log::warn!("Remove ignored: no menu item with id {}", id);
        }
    }
}

// --- UI Drawing Functions ---

pub(crate) fn draw_about_screen(app: &mut ChefMenu, ui: &mut Ui) {
    ui.set_width(INITIAL_WIDTH);
    ui.vertical_centered(|ui| {
        ui.heading(format!("About {}", PROGRAM_TITLE));
        ui.separator();
        for line in about::about() {
            ui.label(line);
        }
        ui.separator();
        if ui.button("OK").clicked() {
            app.navigate(State::Home);
        }
    });
}

pub(crate) fn draw_home_screen(app: &mut ChefMenu, ui: &mut Ui, ctx: &Context) {
    header(ui, PROGRAM_TITLE);
    ui.label(format!("Total Menu Items: {}", app.store.len()));

    for summary in app.store.summary() {
        ui.label(format!(
            "Average Price for {}: {} ({} item{})",
            summary.course,
            format_price(app.currency_symbol(), summary.average),
            summary.count,
            if summary.count == 1 { "" } else { "s" }
        ));
    }
    ui.separator();

    if action_button(ui, "Add/Remove Menu Items") {
        app.navigate(State::ManageMenu);
    }
    if action_button(ui, "Filter Menu by Course") {
        app.navigate(State::FilterMenu);
    }
    ui.horizontal(|ui| {
        if ui.button("About").clicked() {
            app.navigate(State::About);
        }
        if ui.button("Exit").clicked() {
            // `on_exit` will be called
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
    ui.separator();

    let symbol = app.currency_symbol().to_string();
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if app.store.is_empty() {
                ui.label("(No dishes yet. Use \"Add/Remove Menu Items\" to add some.)");
            }
            for item in app.store.iter() {
                menu_item_card(ui, item, |ui| {
                    ui.label(
                        RichText::new(format!(
                            "{} - {} - {}",
                            item.dish_name,
                            item.course,
                            format_price(&symbol, item.price)
                        ))
                        .strong(),
                    );
                });
            }
        });
}

pub(crate) fn draw_manage_screen(app: &mut ChefMenu, ui: &mut Ui) {
    header(ui, "Manage Menu Items");

    ui.add(
        egui::TextEdit::singleline(&mut app.form.dish_name)
            .hint_text("Dish Name")
            .desired_width(FIELD_WIDTH),
    );
    ui.add(
        egui::TextEdit::singleline(&mut app.form.description)
            .hint_text("Description")
            .desired_width(FIELD_WIDTH),
    );
    ui.label("Select Course");
    course_selector(ui, "manage_course_combo", &mut app.form.course);
    ui.add(
        egui::TextEdit::singleline(&mut app.form.price)
            .hint_text(format!("Price (in {})", app.config.data.currency_code))
            .desired_width(FIELD_WIDTH),
    );

    if action_button(ui, "Add Menu Item") {
        app.handle_add_item();
    }
    if action_button(ui, "Go Back") {
        app.navigate(State::Home);
    }
    ui.separator();

    let symbol = app.currency_symbol().to_string();
    let mut to_remove = None;
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for item in app.store.iter() {
                menu_item_card(ui, item, |ui| {
                    ui.label(format!(
                        "{} - {} - {}",
                        item.dish_name,
                        item.course,
                        format_price(&symbol, item.price)
                    ));
                });
                ui.horizontal(|ui| {
                    ui.small(format!("Added {}", item.added_at.format("%H:%M")));
                    if ui
                        .button(RichText::new("Remove").color(REMOVE_COLOR))
                        .clicked()
                    {
                        to_remove = Some(item.id);
                    }
                });
            }
        });

    // Store is borrowed by the list above, so remove after drawing it
    if let Some(id) = to_remove {
        app.handle_remove_item(&id);
    }
}

pub(crate) fn draw_filter_screen(app: &mut ChefMenu, ui: &mut Ui) {
    header(ui, "Filter Menu by Course");

    course_selector(ui, "filter_course_combo", &mut app.filter_course);
    if action_button(ui, "Go Back") {
        app.navigate(State::Home);
    }
    ui.separator();

    let symbol = app.currency_symbol().to_string();
    let filtered = app.store.filter_by_course(app.filter_course);
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if filtered.is_empty() {
                ui.label(format!("(No {} on the menu)", app.filter_course));
            }
            for item in filtered {
                menu_item_card(ui, item, |ui| {
                    ui.label(format!(
                        "{} - {}",
                        item.dish_name,
                        format_price(&symbol, item.price)
                    ));
                });
            }
        });
}

/// Draws the blocking alert window while `app.alert` is set.
pub(crate) fn draw_alert(app: &mut ChefMenu, ctx: &Context) {
    let Some(message) = app.alert.clone() else {
        return;
    };

    egui::Window::new("Alert")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(message);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    app.alert = None;
                }
            });
        });
}

// --- UI Helper Widgets ---

fn header(ui: &mut Ui, text: &str) {
    ui.vertical_centered(|ui| {
        ui.heading(RichText::new(text).strong());
    });
    ui.add_space(10.0);
}

/// Full-width black button with white text. Returns true when clicked.
fn action_button(ui: &mut Ui, title: &str) -> bool {
    let button = egui::Button::new(RichText::new(title).color(Color32::WHITE).strong())
        .fill(BUTTON_COLOR)
        .rounding(10.0)
        .min_size(egui::vec2(ui.available_width(), 32.0));
    ui.add(button).clicked()
}

/// Creates a ComboBox offering the three courses.
fn course_selector(ui: &mut Ui, id_salt: impl std::hash::Hash, selected: &mut Course) {
    egui::ComboBox::from_id_salt(id_salt)
        .width(FIELD_WIDTH)
        .selected_text(selected.to_string())
        .show_ui(ui, |ui| {
            for course in Course::ALL {
                ui.selectable_value(selected, course, course.to_string());
            }
        });
}

/// Bordered box showing a dish's title line and its description.
fn menu_item_card(ui: &mut Ui, item: &MenuItem, title: impl FnOnce(&mut Ui)) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        title(ui);
        ui.label(item.description.as_str());
    });
}
