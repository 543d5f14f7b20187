#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};
use unit_converter::{
    category::Category,
    config,
    conversion::{selectable_labels, ConvertError},
    form::FormState,
    i18n,
};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko-kr/de-de)
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
    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(440.0, 560.0))
        .with_transparent(true);
    if let Some(icon) = icon_data.clone() {
        viewport = viewport.with_icon(icon);
    }
    let cfg = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        let resolved = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
        app_cfg.language = resolved;
    }
    eframe::run_native(
        "Unit Converter",
        cfg,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["unit_converter.png", "icon.png", "assets/icon.png"];
    let path = search
        .iter()
        .find(|p| Path::new(*p).exists())
        .map(|s| s.to_string())?;
    let bytes = fs::read(&path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn heading_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.heading(text).on_hover_text(tip)
}

fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글 UI를 표시하기 위해 CJK 폰트를 우선 적용한다.
/// 1) assets/fonts/ 아래의 폰트
/// 2) Windows 시스템 폰트(맑은 고딕/굴림/바탕 등)
/// 3) 모두 실패 시 Err를 반환해 사용자 지정 폰트 로드를 유도한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    // 1) 프로젝트 내 폰트
    let asset_candidates = [
        "assets/fonts/malgun.ttf",
        "assets/fonts/NotoSansKR-Regular.ttf",
    ];
    for cand in asset_candidates {
        let p = Path::new(cand);
        if p.exists() {
            let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }

    // 2) 시스템 폰트 탐색 (Windows 기준)
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        let candidates = [
            "malgun.ttf",
            "malgunsl.ttf",
            "malgunbd.ttf",
            "gulim.ttc",
            "batang.ttc",
        ];
        for cand in candidates {
            let p = fonts.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "korean_font");
                return Ok(());
            }
        }
    }

    // 3) 실패: 기본 폰트 유지, 사용자 지정 안내
    Err("Font not found. Please set a user font (.ttf/.ttc) in settings.".into())
}

/// 사용자가 선택한 경로의 폰트를 egui에 등록한다.
fn load_custom_font(ctx: &egui::Context, path: &str) -> Result<(), String> {
    let p = Path::new(path);
    if !p.exists() {
        return Err(format!("Font file not found: {path}"));
    }
    let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
    apply_font_bytes(ctx, bytes, "user_font");
    Ok(())
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    lang_pack_dir_input: String,
    lang_save_status: Option<String>,
    // 변환 폼
    form: FormState,
    alert: Option<ConvertError>,
    // 설정
    window_alpha: f32,
    ui_scale: f32,
    always_on_top: bool,
    show_settings_modal: bool,
    show_help_modal: bool,
    custom_font_path: String,
    font_load_error: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        let has_overrides = tr.lookup("gui.nav.app_title").is_some();
        eprintln!("GUI language resolved: {lang_code}, overrides_loaded={has_overrides}");
        let lang_input = config.language.clone();
        let lang_pack_dir_input = config.language_pack_dir.clone().unwrap_or_default();
        Self {
            config: config.clone(),
            tr,
            lang_input,
            lang_pack_dir_input,
            lang_save_status: None,
            form: FormState::new(),
            alert: None,
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            ui_scale: 1.0,
            always_on_top: false,
            show_settings_modal: false,
            show_help_modal: false,
            custom_font_path: String::new(),
            font_load_error: None,
        }
    }

    fn ui_converter(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.unit.heading", "Unit Converter"),
            &txt(
                "gui.unit.tip",
                "Convert a value between two units of the same category.",
            ),
        );
        ui.label(txt(
            "gui.unit.subtitle",
            "Convert Values between different units",
        ));
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.vertical(|ui| {
                egui::Grid::new("conv_grid")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        label_with_tip(
                            ui,
                            &txt("gui.unit.from", "From"),
                            &txt("gui.unit.from_tip", "Current unit of the value"),
                        );
                        let mut from_buf = self.form.from_unit.clone();
                        unit_combo(
                            ui,
                            "conv_from",
                            &mut from_buf,
                            &txt("gui.unit.select", "Select Unit"),
                            &txt,
                        );
                        if from_buf != self.form.from_unit {
                            self.form = self.form.set_from_unit(&from_buf);
                        }
                        ui.end_row();

                        label_with_tip(
                            ui,
                            &txt("gui.unit.to", "To"),
                            &txt("gui.unit.to_tip", "Desired unit after conversion"),
                        );
                        let mut to_buf = self.form.to_unit.clone();
                        unit_combo(
                            ui,
                            "conv_to",
                            &mut to_buf,
                            &txt("gui.unit.select", "Select Unit"),
                            &txt,
                        );
                        if to_buf != self.form.to_unit {
                            self.form = self.form.set_to_unit(&to_buf);
                        }
                        ui.end_row();

                        label_with_tip(
                            ui,
                            &txt("gui.unit.value", "Value"),
                            &txt("gui.unit.value_tip", "Enter the value to convert"),
                        );
                        let mut value_buf = self.form.value.clone();
                        let resp = ui.add(
                            egui::TextEdit::singleline(&mut value_buf)
                                .hint_text(txt("gui.unit.value_hint", "Enter value"))
                                .desired_width(160.0),
                        );
                        if resp.changed() {
                            self.form = self.form.set_value(&value_buf);
                        }
                        ui.end_row();
                    });
                ui.add_space(8.0);
                if ui.button(txt("gui.unit.run", "Convert")).clicked() {
                    let (next, alert) = self.form.convert();
                    self.form = next;
                    self.alert = alert;
                }
                ui.separator();
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(self.form.result_text())
                            .size(32.0)
                            .strong(),
                    );
                    let unit_caption = if self.form.to_unit.is_empty() {
                        txt("gui.unit.placeholder", "Unit")
                    } else {
                        self.form.to_unit.clone()
                    };
                    ui.label(egui::RichText::new(unit_caption).weak());
                });
            });
        });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(if self.always_on_top {
            egui::WindowLevel::AlwaysOnTop
        } else {
            egui::WindowLevel::Normal
        }));

        // 투명도 적용 + 라벨 복사 방지 스타일
        let mut style = (*ctx.style()).clone();
        style.interaction.selectable_labels = false;
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        let tr = self.tr.clone();
        let txt =
            move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt("gui.nav.app_title", "Unit Converter"));
                ui.separator();
                if ui.button(txt("gui.settings.title", "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
                if ui.button(txt("gui.about.title", "Help / About")).clicked() {
                    self.show_help_modal = true;
                }
            });
        });

        // 검증 알림 모달
        if let Some(err) = self.alert {
            let mut open = true;
            let mut dismissed = false;
            egui::Window::new(txt("gui.alert.title", "Alert"))
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.label(txt(err.alert_key(), default_alert(err)));
                    ui.add_space(8.0);
                    ui.vertical_centered(|ui| {
                        if ui.button(txt("gui.alert.ok", "OK")).clicked() {
                            dismissed = true;
                        }
                    });
                });
            if !open || dismissed {
                self.alert = None;
            }
        }

        // 설정 모달
        if self.show_settings_modal {
            egui::Window::new(txt("gui.settings.title", "Settings"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_settings_modal)
                .show(ctx, |ui| {
                    ui.heading(txt("gui.settings.general", "General"));
                    ui.separator();
                    ui.label(txt("gui.settings.ui_scale", "UI scale"));
                    let scale_slider = egui::Slider::new(&mut self.ui_scale, 0.8..=1.6).suffix(" x");
                    if ui.add(scale_slider).changed() {
                        ctx.set_pixels_per_point(self.ui_scale);
                    }
                    ui.separator();
                    ui.checkbox(
                        &mut self.always_on_top,
                        txt("gui.settings.always_on_top", "Always on top"),
                    );
                    ui.separator();
                    ui.label(txt("gui.settings.alpha", "Window transparency"));
                    ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));

                    ui.separator();
                    ui.label(txt("gui.settings.lang", "Language"));
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(&self.lang_input)
                        .show_ui(ui, |ui| {
                            ui.selectable_value(
                                &mut self.lang_input,
                                "auto".into(),
                                txt("gui.settings.lang_auto", "System"),
                            );
                            ui.selectable_value(&mut self.lang_input, "en-us".into(), "English (US)");
                            ui.selectable_value(&mut self.lang_input, "ko-kr".into(), "한국어");
                            ui.selectable_value(&mut self.lang_input, "de-de".into(), "Deutsch");
                        });
                    ui.label(txt("gui.settings.pack_dir", "Language pack folder"));
                    ui.horizontal(|ui| {
                        ui.text_edit_singleline(&mut self.lang_pack_dir_input);
                        if ui.button(txt("gui.settings.pack_browse", "Browse")).clicked() {
                            if let Some(dir) = FileDialog::new().pick_folder() {
                                self.lang_pack_dir_input = dir.display().to_string();
                            }
                        }
                    });

                    ui.separator();
                    ui.label(txt("gui.settings.font", "Custom font (.ttf/.ttc)"));
                    ui.horizontal(|ui| {
                        ui.text_edit_singleline(&mut self.custom_font_path);
                        if ui.button(txt("gui.settings.font_browse", "Browse")).clicked() {
                            if let Some(path) = FileDialog::new()
                                .add_filter("Font", &["ttf", "ttc", "otf"])
                                .pick_file()
                            {
                                self.custom_font_path = path.display().to_string();
                            }
                        }
                        if ui.button(txt("gui.settings.font_load", "Load")).clicked() {
                            self.font_load_error =
                                load_custom_font(ctx, &self.custom_font_path).err();
                        }
                    });
                    if let Some(err) = &self.font_load_error {
                        ui.colored_label(egui::Color32::RED, err);
                    }

                    ui.separator();
                    if ui.button(txt("gui.settings.save", "Save settings")).clicked() {
                        self.config.language = self.lang_input.clone();
                        self.config.language_pack_dir = {
                            let dir = self.lang_pack_dir_input.trim();
                            if dir.is_empty() {
                                None
                            } else {
                                Some(dir.to_string())
                            }
                        };
                        self.config.window_alpha = self.window_alpha;
                        // 즉시 번역기 반영
                        let resolved = i18n::resolve_language(&self.config.language, None);
                        self.tr = i18n::Translator::new_with_pack(
                            &resolved,
                            self.config.language_pack_dir.as_deref(),
                        );
                        if let Err(e) = self.config.save() {
                            self.lang_save_status = Some(format!("Save error: {e}"));
                        } else {
                            self.lang_save_status = Some(txt("gui.settings.saved", "Saved."));
                        }
                    }
                    if let Some(msg) = &self.lang_save_status {
                        ui.label(msg);
                    }
                });
        }

        // 도움말 모달
        if self.show_help_modal {
            egui::Window::new(txt("gui.about.title", "Help / About"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_help_modal)
                .show(ctx, |ui| {
                    ui.heading(txt(
                        "gui.about.app",
                        "Offline converter for length/weight/volume units",
                    ));
                    ui.label(txt("gui.about.version", "Version: 0.1.0"));
                    ui.separator();
                    ui.label(txt("gui.about.units.title", "Unit guide"));
                    let line_tpl = txt("gui.about.units.item", "- {name}: {units} (base {base})");
                    for category in Category::ALL {
                        let name = txt(category_key(category), default_category_label(category));
                        let units = selectable_labels(category).join(", ");
                        ui.label(fill_template(
                            &line_tpl,
                            &[
                                ("name", name),
                                ("units", units),
                                ("base", category.base_unit().to_string()),
                            ],
                        ));
                    }
                    ui.label(txt(
                        "gui.about.gallon",
                        "- Gallons use the rounded 3785 ml factor.",
                    ));
                    ui.label(txt(
                        "gui.about.hint",
                        "Pick both units, enter a value and press Convert; results show two decimals.",
                    ));
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    self.ui_converter(ui);
                });
        });
    }
}

fn category_key(category: Category) -> &'static str {
    match category {
        Category::Length => i18n::keys::CATEGORY_LENGTH,
        Category::Weight => i18n::keys::CATEGORY_WEIGHT,
        Category::Volume => i18n::keys::CATEGORY_VOLUME,
    }
}

fn default_category_label(category: Category) -> &'static str {
    match category {
        Category::Length => "Length",
        Category::Weight => "Weight",
        Category::Volume => "Volume",
    }
}

fn default_alert(err: ConvertError) -> &'static str {
    match err {
        ConvertError::MissingSelection | ConvertError::InvalidInput => "Please fill all fields",
        ConvertError::IncompatibleUnits => "Incompatible unit types selected",
    }
}

/// 카테고리별로 묶인 단위 선택 콤보박스. 선택 전에는 플레이스홀더를 보여준다.
fn unit_combo<F>(ui: &mut egui::Ui, id: &str, value: &mut String, placeholder: &str, txt: &F)
where
    F: Fn(&str, &str) -> String,
{
    let current = if value.is_empty() {
        placeholder.to_string()
    } else {
        value.clone()
    };
    egui::ComboBox::from_id_source(id)
        .selected_text(current)
        .show_ui(ui, |ui| {
            for category in Category::ALL {
                ui.label(
                    egui::RichText::new(txt(
                        category_key(category),
                        default_category_label(category),
                    ))
                    .small()
                    .strong(),
                );
                for label in selectable_labels(category) {
                    ui.selectable_value(value, label.to_string(), label);
                }
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use unit_converter::conversion;

    #[test]
    fn new_app_starts_with_empty_form() {
        let app = GuiApp::new(config::Config::default());
        assert_eq!(app.form, FormState::new());
        assert!(app.alert.is_none());
        assert_eq!(app.form.result_text(), "0");
    }

    #[test]
    fn window_alpha_is_clamped_from_config() {
        let mut cfg = config::Config::default();
        cfg.window_alpha = 5.0;
        let app = GuiApp::new(cfg);
        assert_eq!(app.window_alpha, 1.0);

        let mut cfg = config::Config::default();
        cfg.window_alpha = 0.0;
        let app = GuiApp::new(cfg);
        assert_eq!(app.window_alpha, 0.3);
    }

    #[test]
    fn default_alert_texts_match_form_vocabulary() {
        assert_eq!(
            default_alert(ConvertError::MissingSelection),
            "Please fill all fields"
        );
        assert_eq!(
            default_alert(ConvertError::InvalidInput),
            "Please fill all fields"
        );
        assert_eq!(
            default_alert(ConvertError::IncompatibleUnits),
            "Incompatible unit types selected"
        );
    }

    #[test]
    fn convert_gallons_to_liters() {
        let out = conversion::convert(1.0, "Gallons (gal)", "Liters (l)").unwrap();
        assert!((out - 3.785).abs() < 1e-9);
    }

    #[test]
    fn fill_template_substitutes_all_vars() {
        let out = fill_template(
            "- {name}: base {base}",
            &[("name", "Length".to_string()), ("base", "mm".to_string())],
        );
        assert_eq!(out, "- Length: base mm");
    }
}
