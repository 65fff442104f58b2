// Minimal markdown rendering for assistant replies

use eframe::egui;
use pulldown_cmark::{Event as MarkdownEvent, HeadingLevel, Parser, Tag, TagEnd};

fn heading_size(level: HeadingLevel) -> f32 {
    match level {
        HeadingLevel::H1 => 22.0,
        HeadingLevel::H2 => 19.0,
        HeadingLevel::H3 => 17.0,
        _ => 15.0,
    }
}

pub fn render_markdown(ui: &mut egui::Ui, content: &str) {
    let mut heading: Option<HeadingLevel> = None;
    let mut in_code_block = false;
    let mut strong = false;
    let mut emphasis = false;

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;

        for event in Parser::new(content) {
            match event {
                MarkdownEvent::Start(tag) => match tag {
                    Tag::Heading { level, .. } => heading = Some(level),
                    Tag::CodeBlock(_) => in_code_block = true,
                    Tag::Strong => strong = true,
                    Tag::Emphasis => emphasis = true,
                    Tag::Item => {
                        ui.label("• ");
                    }
                    _ => {}
                },
                MarkdownEvent::End(tag) => match tag {
                    TagEnd::Heading(_) => {
                        heading = None;
                        ui.end_row();
                    }
                    TagEnd::CodeBlock => {
                        in_code_block = false;
                        ui.end_row();
                    }
                    TagEnd::Strong => strong = false,
                    TagEnd::Emphasis => emphasis = false,
                    TagEnd::Paragraph | TagEnd::Item => ui.end_row(),
                    _ => {}
                },
                MarkdownEvent::Text(text) => {
                    if in_code_block {
                        ui.monospace(text.as_ref());
                        continue;
                    }
                    let mut rich = egui::RichText::new(text.as_ref());
                    if let Some(level) = heading {
                        rich = rich.size(heading_size(level)).strong();
                    }
                    if strong {
                        rich = rich.strong();
                    }
                    if emphasis {
                        rich = rich.italics();
                    }
                    ui.label(rich);
                }
                MarkdownEvent::Code(code) => {
                    ui.label(
                        egui::RichText::new(code.as_ref())
                            .monospace()
                            .background_color(ui.visuals().code_bg_color),
                    );
                }
                MarkdownEvent::SoftBreak => {
                    ui.label(" ");
                }
                MarkdownEvent::HardBreak => ui.end_row(),
                _ => {}
            }
        }
    });
}
