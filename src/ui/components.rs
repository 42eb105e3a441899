// Reusable UI components
// Agent cards, filter controls, and toast rendering

use eframe::egui;
use crate::state::{AgentKey, AgentRecord, Category, Notifications, ToastKind};

/// Accent color per agent
fn agent_color(key: AgentKey) -> egui::Color32 {
    match key {
        AgentKey::Main => egui::Color32::from_rgb(90, 140, 255), // Blue
        AgentKey::Curriculum => egui::Color32::from_rgb(0, 180, 120), // Green
        AgentKey::Materials => egui::Color32::from_rgb(230, 150, 0), // Orange
        AgentKey::Enhanced => egui::Color32::from_rgb(170, 90, 230), // Purple
    }
}

/// Render the agent title in its accent color
pub fn agent_badge(ui: &mut egui::Ui, key: AgentKey) {
    ui.colored_label(agent_color(key), egui::RichText::new(key.title()).strong());
}

/// Render a quick action button tinted like the agent it narrows to
pub fn quick_action_button(ui: &mut egui::Ui, text: &str, category: Category) -> egui::Response {
    let color = category
        .agent_key()
        .map(agent_color)
        .unwrap_or(egui::Color32::GRAY);
    ui.button(egui::RichText::new(text).strong().color(color))
}

/// Category drop-down
/// Returns the newly picked category, if any
pub fn category_selector(ui: &mut egui::Ui, current: Category) -> Option<Category> {
    let mut selected = current;
    egui::ComboBox::from_id_source("category_selector")
        .selected_text(selected.label())
        .show_ui(ui, |ui| {
            for category in Category::ALL {
                ui.selectable_value(&mut selected, category, category.label());
            }
        });
    (selected != current).then_some(selected)
}

/// Render one agent card
/// Returns true if the copy button was clicked
pub fn agent_card(ui: &mut egui::Ui, record: &AgentRecord) -> bool {
    let mut copy_clicked = false;
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.vertical(|ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.add_space(8.0);
                agent_badge(ui, record.key);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(8.0);
                    ui.label(egui::RichText::new(&record.image_ref).weak().small());
                });
            });

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.add_space(8.0);
                ui.label(&record.description);
            });

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(&record.address)
                        .monospace()
                        .weak()
                        .size(12.0),
                );
                if ui.small_button("📋 Copy").on_hover_text("Copy address").clicked() {
                    copy_clicked = true;
                }
            });

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.add_space(8.0);
                let link = ui.add(
                    egui::Hyperlink::from_label_and_url("View Profile →", &record.profile_link)
                        .open_in_new_tab(true),
                );
                if link.clicked() {
                    tracing::debug!(agent = %record.key, url = %record.profile_link, "Opening profile");
                }
            });
            ui.add_space(8.0);
        });
    });
    copy_clicked
}

/// Render a port entry; records without a port render nothing
pub fn port_entry(ui: &mut egui::Ui, record: &AgentRecord) {
    if let Some(port) = record.port {
        ui.group(|ui| {
            ui.vertical(|ui| {
                agent_badge(ui, record.key);
                ui.label(egui::RichText::new(format!("Port: {}", port)).monospace());
            });
        });
    }
}

/// Placeholder shown when the filter leaves nothing
pub fn empty_results(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(egui::RichText::new("No agents match").italics().weak().size(14.0));
        ui.add_space(8.0);
        ui.label(egui::RichText::new("Try another search or View > Clear Filters").weak().size(12.0));
    });
}

/// Render live toasts in the bottom-right corner
pub fn render_toasts(ctx: &egui::Context, notifications: &Notifications) {
    if notifications.is_empty() {
        return;
    }
    egui::Area::new(egui::Id::new("toasts"))
        .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -48.0])
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            for toast in notifications.iter() {
                let color = match toast.kind {
                    ToastKind::Success => egui::Color32::from_rgb(0, 180, 0),
                    ToastKind::Failure => egui::Color32::from_rgb(220, 0, 0),
                };
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.colored_label(color, &toast.message);
                });
                ui.add_space(4.0);
            }
        });
}
