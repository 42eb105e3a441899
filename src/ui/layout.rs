// Main application layout
// Handles menu bar, header, filter bar, agent cards, ports, and footer

use eframe::egui;
use crate::clipboard::ClipboardBackend;
use crate::state::{AppState, Category};
use crate::ui::components::*;

/// Outbound links shown in the footer
const FOOTER_LINKS: [(&str, &str); 2] = [
    ("AgentVerse", "https://agentverse.ai"),
    ("GitHub", "https://github.com"),
];

/// Quick actions and the category each one selects
const QUICK_ACTIONS: [(&str, Category); 3] = [
    ("📚 Start Learning", Category::Learning),
    ("🔍 Find Resources", Category::Materials),
    ("🧠 Get Insights", Category::Insights),
];

/// Render the main application layout
/// Includes menu bar, header, filter bar, agent list, and footer
pub fn render_app_layout(
    ctx: &egui::Context,
    state: &mut AppState,
    clipboard: &mut dyn ClipboardBackend,
) {
    render_menu_bar(ctx, state);
    render_footer(ctx);

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .id_source("directory_scroll")
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.add_space(8.0);
                render_header(ui);
                ui.add_space(12.0);
                ui.separator();
                ui.add_space(8.0);

                render_filter_bar(ui, state);
                ui.add_space(8.0);
                render_agent_list(ui, state, clipboard);

                if state.ui_state.ports_visible {
                    ui.add_space(16.0);
                    render_ports(ui, state);
                }
                if state.ui_state.quick_actions_visible {
                    ui.add_space(16.0);
                    render_quick_actions(ui, state);
                }
                ui.add_space(16.0);
            });
    });

    render_toasts(ctx, &state.notifications);
}

/// Render the top menu bar
fn render_menu_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            // File menu
            ui.menu_button("File", |ui| {
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            // View menu
            ui.menu_button("View", |ui| {
                let mut dark_mode = ctx.style().visuals.dark_mode;
                if ui.checkbox(&mut dark_mode, "Dark Mode").changed() {
                    ctx.style_mut(|style| {
                        style.visuals.dark_mode = dark_mode;
                    });
                }
                ui.separator();
                ui.checkbox(&mut state.ui_state.ports_visible, "Agent Ports");
                ui.checkbox(&mut state.ui_state.quick_actions_visible, "Quick Actions");
                ui.separator();
                if ui.button("Clear Filters").clicked() {
                    state.reset_filters();
                    ui.close_menu();
                }
            });
        });
    });
}

/// Render the title block
fn render_header(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.heading(egui::RichText::new("🚀 EduFinder").size(28.0));
        ui.add_space(4.0);
        ui.label(egui::RichText::new("AI-Powered Learning Path System").size(16.0));
        ui.add_space(8.0);
        ui.colored_label(
            egui::Color32::from_rgb(0, 180, 0),
            "EduFinder Multi-Agent System Running",
        );
        ui.label(
            egui::RichText::new("Welcome to EduFinder! Your AI-powered learning companion.")
                .weak(),
        );
    });
}

/// Render the search box, category selector, and result count
fn render_filter_bar(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.heading("🤖 Active Agents");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(format!("{} agents shown", state.result_summary())).weak(),
            );
        });
    });
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        let mut query = state.filter.query.clone();
        let search = ui.add(
            egui::TextEdit::singleline(&mut query)
                .hint_text("Search by name or address")
                .desired_width(320.0),
        );
        if search.changed() {
            state.set_query(&query);
        }

        ui.add_space(8.0);
        if let Some(category) = category_selector(ui, state.filter.category) {
            state.set_category(category);
        }

        if !state.filter.is_default() {
            ui.add_space(8.0);
            if ui.button("Clear").clicked() {
                state.reset_filters();
            }
        }
    });
}

/// Render one card per visible agent
fn render_agent_list(
    ui: &mut egui::Ui,
    state: &mut AppState,
    clipboard: &mut dyn ClipboardBackend,
) {
    let agents = state.visible_agents();
    if agents.is_empty() {
        empty_results(ui);
        return;
    }

    let now = ui.input(|i| i.time);
    for record in agents {
        if agent_card(ui, record) {
            state.copy_address(clipboard, record.key, now);
        }
        ui.add_space(6.0);
    }
}

/// Render the ports section for agents that have one
fn render_ports(ui: &mut egui::Ui, state: &AppState) {
    ui.heading("🔌 Agent Ports");
    ui.add_space(4.0);
    ui.horizontal_wrapped(|ui| {
        for record in state.catalog.records() {
            port_entry(ui, record);
        }
    });
}

/// Render the quick actions row
fn render_quick_actions(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("🎯 Quick Actions");
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.spacing_mut().button_padding = egui::vec2(12.0, 8.0);
        for (label, category) in QUICK_ACTIONS {
            if quick_action_button(ui, label, category).clicked() {
                state.set_category(category);
            }
            ui.add_space(8.0);
        }
    });
}

/// Render the footer with outbound links
fn render_footer(ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Powered by uAgents Framework & Gemini AI").weak());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                for (label, url) in FOOTER_LINKS.iter().rev() {
                    ui.add(egui::Hyperlink::from_label_and_url(*label, *url).open_in_new_tab(true));
                }
            });
        });
        ui.add_space(4.0);
    });
}
