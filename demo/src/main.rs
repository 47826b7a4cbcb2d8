use depgraph::{
    reset_metadata, sample_graph, Controller, DependencyGraphView, Graph, SettingsConnect,
    SettingsNavigation, SettingsStyle,
};
use eframe::{run_native, App, CreationContext, Frame, NativeOptions};
use egui::{CentralPanel, Context, RichText, ScrollArea, SidePanel, TopBottomPanel, Ui};
use log::{error, info};

#[cfg(feature = "events")]
use crossbeam::channel::{unbounded, Receiver, Sender};
#[cfg(feature = "events")]
use depgraph::events::Event;

const APP_NAME: &str = "Source Code Dependency Graph";
const DESCRIPTION: &str = "Interactive visualization of dependencies between files in a \
    codebase. Drag nodes to rearrange, use the controls to zoom and pan, and click on nodes \
    to highlight their dependencies.";
#[cfg(feature = "events")]
const EVENTS_LIMIT: usize = 50;

pub struct DemoApp {
    g: Graph,
    controller: Controller,

    settings_connect: SettingsConnect,
    settings_navigation: SettingsNavigation,
    settings_style: SettingsStyle,

    #[cfg(feature = "events")]
    events: (Sender<Event>, Receiver<Event>),
    #[cfg(feature = "events")]
    last_events: Vec<String>,
}

impl DemoApp {
    fn new(_: &CreationContext<'_>) -> Self {
        let g = sample_graph().unwrap_or_else(|err| {
            error!("failed to seed the sample graph: {err}");
            Graph::new()
        });
        info!(
            "seeded {} files and {} dependencies",
            g.node_count(),
            g.edge_count()
        );

        let settings_connect = g.connect_settings().clone();
        Self {
            g,
            controller: Controller::new(),

            settings_connect,
            settings_navigation: SettingsNavigation::default(),
            settings_style: SettingsStyle::default(),

            #[cfg(feature = "events")]
            events: unbounded(),
            #[cfg(feature = "events")]
            last_events: Vec::default(),
        }
    }

    fn draw_side_panel(&mut self, ui: &mut Ui) {
        ScrollArea::vertical().show(ui, |ui| {
            ui.heading("Selection");
            match self.controller.selection().focused() {
                Some(id) => {
                    let node = self.g.node(id.as_str());
                    ui.label(format!(
                        "{} ({})",
                        node.map_or(id.as_str(), |n| n.label()),
                        node.map_or("", |n| n.category()),
                    ));
                    ui.label(format!("{} connected files", self.g.neighbors(id.as_str()).len()));
                    ui.label(format!(
                        "{} highlighted edges",
                        self.g.edges_touching(id.as_str()).len()
                    ));
                }
                None => {
                    ui.label("none, click a file to highlight its dependencies");
                }
            }

            ui.separator();
            ui.heading("Graph");
            ui.label(format!("files: {}", self.g.node_count()));
            ui.label(format!("dependencies: {}", self.g.edge_count()));

            ui.separator();
            ui.heading("Connections");
            let mut changed = ui
                .checkbox(&mut self.settings_connect.allow_self_loops, "allow self loops")
                .changed();
            changed |= ui
                .checkbox(&mut self.settings_connect.allow_duplicates, "allow duplicates")
                .changed();
            if changed {
                info!("connect settings changed: {:?}", self.settings_connect);
                self.g.set_connect_settings(self.settings_connect.clone());
            }

            ui.separator();
            ui.heading("View");
            ui.checkbox(&mut self.settings_style.minimap, "minimap");
            ui.checkbox(&mut self.settings_style.controls, "controls");
            ui.checkbox(&mut self.settings_style.background, "background");
            if ui.button("reset view").clicked() {
                reset_metadata(ui, None);
            }

            #[cfg(feature = "events")]
            self.draw_events(ui);
        });
    }

    #[cfg(feature = "events")]
    fn draw_events(&mut self, ui: &mut Ui) {
        ui.separator();
        ui.heading("Events");
        for e in self.events.1.try_iter() {
            self.last_events.push(format!("{e:?}"));
        }
        if self.last_events.len() > EVENTS_LIMIT {
            let excess = self.last_events.len() - EVENTS_LIMIT;
            self.last_events.drain(..excess);
        }
        for e in self.last_events.iter().rev() {
            ui.label(RichText::new(e).small());
        }
    }
}

impl App for DemoApp {
    fn update(&mut self, ctx: &Context, _: &mut Frame) {
        TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading(APP_NAME);
            ui.label(RichText::new(DESCRIPTION).weak());
            ui.add_space(4.);
        });

        SidePanel::right("side_panel")
            .default_width(240.)
            .show(ctx, |ui| self.draw_side_panel(ui));

        CentralPanel::default().show(ctx, |ui| {
            let mut view = DependencyGraphView::new(&mut self.g, &mut self.controller)
                .with_navigations(&self.settings_navigation)
                .with_styles(&self.settings_style);

            #[cfg(feature = "events")]
            {
                view = view.with_event_sink(&self.events.0);
            }

            ui.add(&mut view);
        });
    }
}

fn main() -> eframe::Result<()> {
    env_logger::init();

    run_native(
        APP_NAME,
        NativeOptions::default(),
        Box::new(|cc| Ok(Box::new(DemoApp::new(cc)))),
    )
}
