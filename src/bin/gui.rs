#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use std::{env, fs, path::Path};
use unit_converter_toolbox::{
    config,
    i18n::{self, keys},
    quantity::Category,
    registry::{ConversionRow, Registry, UnitInfo},
};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/pt-br/en-us)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default();
    if let Some(icon) = icon_data {
        viewport = viewport.with_icon(icon);
    }
    let native = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }
    eframe::run_native(
        "Unit Converter Toolbox",
        native,
        Box::new(move |_cc| Box::new(GuiApp::new(app_cfg))),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    registry: Registry,
    category: Category,
    from_key: &'static str,
    value_input: String,
    precision: u8,
    rows: Option<Vec<ConversionRow>>,
    // 결과 대신 보여줄 안내/오류 한 줄
    message: Option<String>,
    show_settings_modal: bool,
    lang_input: String,
    lang_save_status: Option<String>,
}

impl GuiApp {
    fn new(cfg: config::Config) -> Self {
        let resolved = i18n::resolve_language(&cfg.language, None);
        let tr = i18n::Translator::new(&resolved);
        let category = cfg.default_category;
        let from_key = cfg.default_units.key_for(category);
        let precision = cfg.precision.min(config::MAX_PRECISION);
        let message = Some(tr.t(keys::CONVERTER_INFO_INITIAL).to_string());
        let lang_input = cfg.language.clone();
        Self {
            config: cfg,
            tr,
            registry: Registry::standard(),
            category,
            from_key,
            value_input: String::new(),
            precision,
            rows: None,
            message,
            show_settings_modal: false,
            lang_input,
            lang_save_status: None,
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let tr = self.tr.clone();

        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(tr.t(keys::GUI_HEADING));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(tr.t(keys::GUI_SETTINGS_TITLE)).clicked() {
                        self.show_settings_modal = true;
                    }
                });
            });
        });

        // 설정 모달
        if self.show_settings_modal {
            egui::Window::new(tr.t(keys::GUI_SETTINGS_TITLE))
                .collapsible(false)
                .resizable(false)
                .open(&mut self.show_settings_modal)
                .show(ctx, |ui| {
                    ui.label(tr.t(keys::GUI_SETTINGS_LANG));
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(self.lang_input.clone())
                        .show_ui(ui, |ui| {
                            ui.selectable_value(&mut self.lang_input, "auto".into(), "auto");
                            ui.selectable_value(
                                &mut self.lang_input,
                                "pt-br".into(),
                                "Português (BR)",
                            );
                            ui.selectable_value(
                                &mut self.lang_input,
                                "en-us".into(),
                                "English (US)",
                            );
                        });
                    ui.separator();
                    ui.label(tr.t(keys::GUI_PRECISION));
                    ui.add(egui::Slider::new(
                        &mut self.precision,
                        0..=config::MAX_PRECISION,
                    ));
                    ui.separator();
                    if ui.button(tr.t(keys::GUI_SETTINGS_SAVE)).clicked() {
                        self.config.language = self.lang_input.clone();
                        self.config.precision = self.precision;
                        // 즉시 번역기 반영
                        let resolved = i18n::resolve_language(&self.config.language, None);
                        self.tr = i18n::Translator::new(&resolved);
                        self.lang_save_status = Some(match self.config.save() {
                            Ok(()) => tr.t(keys::SETTINGS_SAVED).to_string(),
                            Err(e) => format!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
                        });
                    }
                    if let Some(msg) = &self.lang_save_status {
                        ui.label(msg);
                    }
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(tr.t(keys::GUI_TIP));
            ui.add_space(8.0);
            egui::Frame::group(ui.style()).show(ui, |ui| {
                let mut run_conversion = false;
                egui::Grid::new("conv_grid")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        ui.label(tr.t(keys::GUI_CATEGORY));
                        let before = self.category;
                        let cat_options: Vec<(Category, &'static str)> = self
                            .registry
                            .categories()
                            .iter()
                            .map(|c| (c.category, c.label_key))
                            .collect();
                        egui::ComboBox::from_id_source("conv_category")
                            .selected_text(tr.t(before.label_key()))
                            .show_ui(ui, |ui| {
                                for (cat, label_key) in &cat_options {
                                    ui.selectable_value(&mut self.category, *cat, tr.t(label_key));
                                }
                            });
                        if before != self.category {
                            // 카테고리가 바뀌면 단위 선택과 결과를 초기화한다.
                            self.from_key = self.config.default_units.key_for(self.category);
                            self.rows = None;
                            self.message =
                                Some(tr.t(keys::CONVERTER_INFO_CATEGORY_CHANGED).to_string());
                        }
                        ui.end_row();

                        ui.label(tr.t(keys::GUI_FROM_UNIT));
                        let units: Vec<UnitInfo> =
                            self.registry.units(self.category.key()).unwrap_or_default();
                        let selected_label = units
                            .iter()
                            .find(|u| u.key == self.from_key)
                            .map(|u| tr.t(u.label_key))
                            .unwrap_or("?");
                        egui::ComboBox::from_id_source("conv_from")
                            .selected_text(selected_label)
                            .show_ui(ui, |ui| {
                                for unit in &units {
                                    ui.selectable_value(
                                        &mut self.from_key,
                                        unit.key,
                                        tr.t(unit.label_key),
                                    );
                                }
                            });
                        ui.end_row();

                        ui.label(tr.t(keys::GUI_VALUE));
                        let resp = ui.add(egui::TextEdit::singleline(&mut self.value_input));
                        if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                            run_conversion = true;
                        }
                        ui.end_row();

                        ui.label(tr.t(keys::GUI_PRECISION));
                        ui.add(egui::Slider::new(
                            &mut self.precision,
                            0..=config::MAX_PRECISION,
                        ));
                        ui.end_row();
                    });
                ui.add_space(8.0);
                if ui.button(tr.t(keys::GUI_CONVERT)).clicked() {
                    run_conversion = true;
                }
                if run_conversion {
                    match self.value_input.trim().parse::<f64>() {
                        Ok(v) if v.is_finite() => {
                            match self.registry.convert_all(
                                self.category.key(),
                                self.from_key,
                                v,
                            ) {
                                Ok(rows) => {
                                    self.rows = Some(rows);
                                    self.message = None;
                                }
                                Err(e) => {
                                    self.rows = None;
                                    self.message =
                                        Some(format!("{}: {e}", tr.t(keys::ERROR_PREFIX)));
                                }
                            }
                        }
                        _ => {
                            self.rows = None;
                            self.message = Some(tr.t(keys::ERROR_INVALID_NUMBER).to_string());
                        }
                    }
                }
            });

            ui.add_space(8.0);
            if let Some(msg) = &self.message {
                ui.label(msg);
            } else if let Some(rows) = &self.rows {
                let precision = self.precision as usize;
                egui::Grid::new("conv_results")
                    .num_columns(2)
                    .striped(true)
                    .spacing([24.0, 4.0])
                    .show(ui, |ui| {
                        ui.strong(tr.t(keys::CONVERTER_TABLE_UNIT));
                        ui.strong(tr.t(keys::CONVERTER_TABLE_VALUE));
                        ui.end_row();
                        for row in rows {
                            let value = format!("{:.precision$}", row.value);
                            if row.is_source {
                                ui.strong(format!(
                                    "{} {}",
                                    tr.t(row.label_key),
                                    tr.t(keys::CONVERTER_SOURCE_MARKER)
                                ));
                                ui.strong(value);
                            } else {
                                ui.label(tr.t(row.label_key));
                                ui.label(value);
                            }
                            ui.end_row();
                        }
                    });
            }
        });
    }
}
