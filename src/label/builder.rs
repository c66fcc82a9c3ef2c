//! # Label Builder
//!
//! Runs the pipeline for one stock: width estimation, centering, and
//! instruction emission.
//!
//! ## Emission Order
//!
//! For each label: `SIZE`, `GAP`, `OFFSET` (only when non-zero),
//! `REFERENCE`, `DIRECTION`, `DENSITY`, `SPEED`, `CLS`, one instruction per
//! filled slot, `PRINT`. A single `END` closes the job.
//!
//! The config and layout are checked before any op is generated, so a
//! build either fails up front or returns a complete job.

use tracing::{debug, warn};

use crate::error::{EtiquetaError, Result};
use crate::ir::{BarcodeElement, CommandStream, Op, Program, TextElement};
use crate::layout::{self, Placement};
use crate::metrics::{TableEstimator, WidthEstimator};
use crate::printer::LabelConfig;
use crate::printer::presets;

use super::content::{LabelContent, truncate_chars};
use super::template::{LabelLayout, Slot, SlotKind};

/// Builds TSPL jobs for one label stock and layout.
///
/// ## Example
///
/// ```
/// use etiqueta::label::{LabelBuilder, LabelContent};
///
/// let builder = LabelBuilder::from_preset("51x25")?;
/// let stream = builder.build(&LabelContent::new("Producto de Prueba", "1234567890123", 29.99))?;
/// assert!(stream.as_str().contains("BARCODE 89,"));
/// # Ok::<(), etiqueta::EtiquetaError>(())
/// ```
pub struct LabelBuilder {
    config: LabelConfig,
    layout: LabelLayout,
    estimator: Box<dyn WidthEstimator + Send + Sync>,
}

impl LabelBuilder {
    /// Builder using the reference width table, rescaled to the stock's DPI.
    pub fn new(config: LabelConfig, layout: LabelLayout) -> Self {
        let estimator = TableEstimator::default().for_dpi(config.dpi);
        Self {
            config,
            layout,
            estimator: Box::new(estimator),
        }
    }

    /// Builder for a registered preset.
    pub fn from_preset(key: &str) -> Result<Self> {
        let preset = presets::preset(key)?;
        Ok(Self::new(preset.config, preset.layout()))
    }

    /// Swap in a different width estimator (e.g. a calibrated table).
    pub fn with_estimator(mut self, estimator: impl WidthEstimator + Send + Sync + 'static) -> Self {
        self.estimator = Box::new(estimator);
        self
    }

    /// Override copies per label.
    pub fn with_copies(mut self, copies: u32) -> Self {
        self.layout.copies = copies;
        self
    }

    pub fn config(&self) -> &LabelConfig {
        &self.config
    }

    pub fn layout(&self) -> &LabelLayout {
        &self.layout
    }

    /// IR for a single label, `END` included.
    pub fn program(&self, content: &LabelContent) -> Result<Program> {
        self.program_many(std::slice::from_ref(content))
    }

    /// IR for consecutive labels in one job, with a single trailing `END`.
    pub fn program_many(&self, contents: &[LabelContent]) -> Result<Program> {
        self.check()?;
        if contents.is_empty() {
            return Err(EtiquetaError::InvalidCommand(
                "no labels to print".to_string(),
            ));
        }

        let mut program = Program::new();
        for content in contents {
            self.emit_label(content, &mut program);
        }
        program.push(Op::End);

        debug!(
            labels = contents.len(),
            ops = program.len(),
            width_dots = self.config.width_dots(),
            height_dots = self.config.height_dots(),
            "built label job"
        );
        Ok(program)
    }

    /// TSPL for a single label.
    pub fn build(&self, content: &LabelContent) -> Result<CommandStream> {
        Ok(self.program(content)?.to_tspl())
    }

    /// TSPL for consecutive labels in one transmission.
    pub fn build_many(&self, contents: &[LabelContent]) -> Result<CommandStream> {
        Ok(self.program_many(contents)?.to_tspl())
    }

    fn check(&self) -> Result<()> {
        self.config.validate()?;
        self.layout.validate(&self.config)
    }

    fn emit_label(&self, content: &LabelContent, program: &mut Program) {
        program.extend(self.setup_ops());
        for slot in &self.layout.slots {
            if let Some(op) = self.slot_op(slot, content) {
                program.push(op);
            }
        }
        program.push(Op::Print {
            copies: self.layout.copies,
        });
    }

    fn setup_ops(&self) -> Vec<Op> {
        let c = &self.config;
        let mut ops = vec![
            Op::Size {
                width_mm: c.width,
                height_mm: c.height,
            },
            Op::Gap { mm: c.gap },
        ];
        if c.offset.vertical != 0.0 {
            ops.push(Op::Offset {
                mm: c.offset.vertical,
            });
        }
        ops.extend([
            Op::Reference { x: 0, y: 0 },
            Op::Direction(c.orientation),
            Op::Density(self.layout.density),
            Op::Speed(self.layout.speed),
            Op::Cls,
        ]);
        ops
    }

    /// The op for one slot, or `None` when the content has nothing for it.
    fn slot_op(&self, slot: &Slot, content: &LabelContent) -> Option<Op> {
        let budget = self.layout.name_budget;
        match slot.kind {
            SlotKind::Name => {
                let name = content.display_name(budget);
                if name.chars().count() < content.name.trim().chars().count() {
                    debug!(budget, original = %content.name, "truncated product name");
                }
                self.text_op(slot, name)
            }
            SlotKind::Price => self.text_op(slot, content.display_price()?),
            SlotKind::Sku => self.text_op(slot, truncate_chars(content.display_sku()?, budget)),
            SlotKind::Barcode => self.barcode_op(slot, content.barcode_payload()?),
        }
    }

    fn text_op(&self, slot: &Slot, text: String) -> Option<Op> {
        if text.is_empty() {
            return None;
        }
        let width = self.estimator.text_width(&text, slot.font, slot.x_mul);
        Some(Op::Text(TextElement {
            position: self.position(slot, width),
            content: text,
            font: slot.font,
            rotation: slot.rotation,
            x_mul: slot.x_mul,
            y_mul: slot.y_mul,
        }))
    }

    fn barcode_op(&self, slot: &Slot, payload: &str) -> Option<Op> {
        let style = &self.layout.barcode;
        let symbology = style.symbology_for(payload);
        let width = self
            .estimator
            .barcode_width(symbology, payload, style.narrow);
        Some(Op::Barcode(BarcodeElement {
            symbology,
            payload: payload.to_string(),
            height: style.height,
            human_readable: style.human_readable,
            rotation: slot.rotation,
            narrow: style.narrow,
            wide: style.wide,
            position: self.position(slot, width),
        }))
    }

    /// Centered placement, or the left margin for sideways slots whose
    /// width runs down the label.
    fn position(&self, slot: &Slot, width: u32) -> Placement {
        if slot.rotation.is_sideways() {
            return Placement {
                x: self.config.left_margin_dots(),
                y: slot.y.to_dots(&self.config),
            };
        }
        self.warn_if_oversized(slot.kind, width);
        layout::place(width, slot.y, &self.config)
    }

    fn warn_if_oversized(&self, kind: SlotKind, width: u32) {
        if !layout::fits(width, &self.config) {
            warn!(
                ?kind,
                width,
                printable = self.config.printable_width_dots(),
                "element wider than printable area, placing flush left"
            );
        }
    }
}

/// Build one label for an explicit config and layout.
pub fn build(
    config: &LabelConfig,
    content: &LabelContent,
    layout: &LabelLayout,
) -> Result<CommandStream> {
    LabelBuilder::new(*config, layout.clone()).build(content)
}

/// Build consecutive labels for an explicit config and layout.
pub fn build_many(
    config: &LabelConfig,
    layout: &LabelLayout,
    contents: &[LabelContent],
) -> Result<CommandStream> {
    LabelBuilder::new(*config, layout.clone()).build_many(contents)
}

/// Build one label on a registered preset.
///
/// ```
/// let stream = etiqueta::render("50x20", &etiqueta::LabelContent::new("Tornillo", "SKU-42", 0.35))?;
/// assert!(etiqueta::ir::is_valid(&stream));
/// # Ok::<(), etiqueta::EtiquetaError>(())
/// ```
pub fn render(preset_key: &str, content: &LabelContent) -> Result<CommandStream> {
    LabelBuilder::from_preset(preset_key)?.build(content)
}

/// Build consecutive labels on a registered preset.
pub fn render_many(preset_key: &str, contents: &[LabelContent]) -> Result<CommandStream> {
    LabelBuilder::from_preset(preset_key)?.build_many(contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::is_valid;
    use crate::label::template::BarcodeStyle;
    use crate::metrics::FontTable;
    use crate::printer::{Dpi, Margins};
    use crate::protocol::barcode::Symbology;
    use crate::protocol::text::{FontTier, Rotation};

    fn layout() -> LabelLayout {
        LabelLayout::new(
            [
                Slot::name(8, FontTier::Two),
                Slot::barcode(34),
                Slot::price(134, FontTier::Three),
                Slot::sku(166, FontTier::One),
            ],
            BarcodeStyle::new(70, 2, 2),
            30,
        )
    }

    fn config() -> LabelConfig {
        LabelConfig::new(51.0, 25.0, Dpi::Dpi203).with_gap(2.0)
    }

    fn texts(program: &Program) -> Vec<&TextElement> {
        program
            .iter()
            .filter_map(|op| match op {
                Op::Text(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_single_label_structure() {
        let builder = LabelBuilder::new(config(), layout());
        let program = builder
            .program(&LabelContent::new("Producto de Prueba", "1234567890123", 29.99).with_sku("PP-1"))
            .unwrap();

        assert!(matches!(program.ops[0], Op::Size { .. }));
        assert!(matches!(program.ops[1], Op::Gap { .. }));
        assert!(matches!(program.ops[2], Op::Reference { x: 0, y: 0 }));
        assert_eq!(program.ops[6], Op::Cls);
        assert_eq!(program.content_count(), 4);
        assert_eq!(program.ops[program.len() - 2], Op::Print { copies: 1 });
        assert_eq!(program.ops[program.len() - 1], Op::End);
    }

    #[test]
    fn test_barcode_centered() {
        let builder = LabelBuilder::new(config(), layout());
        let program = builder
            .program(&LabelContent::new("X", "1234567890123", 1.0))
            .unwrap();
        let barcode = program
            .iter()
            .find_map(|op| match op {
                Op::Barcode(b) => Some(b),
                _ => None,
            })
            .unwrap();
        assert_eq!(barcode.symbology, Symbology::Ean13);
        assert_eq!(barcode.position.x, 89);
        assert_eq!(barcode.position.y, 34);
    }

    #[test]
    fn test_text_centered() {
        let builder = LabelBuilder::new(config(), layout());
        let program = builder
            .program(&LabelContent::new("Producto de Prueba", "", 29.99))
            .unwrap();
        let t = texts(&program);
        // 18 chars * 12 = 216, (408 - 216) / 2 = 96
        assert_eq!(t[0].content, "Producto de Prueba");
        assert_eq!(t[0].position.x, 96);
        // "$29.99" = 6 * 16 = 96, (408 - 96) / 2 = 156
        assert_eq!(t[1].content, "$29.99");
        assert_eq!(t[1].position.x, 156);
    }

    #[test]
    fn test_missing_optional_fields_skip_instructions() {
        let builder = LabelBuilder::new(config(), layout());
        let program = builder
            .program(&LabelContent::new("Solo nombre", "", 0.0).without_price())
            .unwrap();
        assert_eq!(program.content_count(), 1);
        assert!(is_valid(&program.to_tspl()));
    }

    #[test]
    fn test_name_truncated_to_budget() {
        let mut l = layout();
        l.name_budget = 8;
        let builder = LabelBuilder::new(config(), l);
        let program = builder
            .program(&LabelContent::new("Producto de Prueba", "", 1.0))
            .unwrap();
        assert_eq!(texts(&program)[0].content, "Producto");
    }

    #[test]
    fn test_vertical_offset_emits_offset() {
        let builder = LabelBuilder::new(config().with_offset(0.0, 1.5), layout());
        let program = builder.program(&LabelContent::new("A", "", 1.0)).unwrap();
        assert_eq!(program.ops[2], Op::Offset { mm: 1.5 });
        assert_eq!(program.ops[3], Op::Reference { x: 0, y: 0 });
    }

    #[test]
    fn test_margins_shift_layout() {
        let builder = LabelBuilder::new(
            config().with_margins(Margins::symmetric(0.5, 2.0)),
            layout(),
        );
        let program = builder
            .program(&LabelContent::new("X", "1234567890123", 1.0))
            .unwrap();
        let barcode = program
            .iter()
            .find_map(|op| match op {
                Op::Barcode(b) => Some(b),
                _ => None,
            })
            .unwrap();
        // printable 376, (376 - 230) / 2 + 16
        assert_eq!(barcode.position.x, 89);
    }

    #[test]
    fn test_oversized_barcode_flush_left() {
        let config = LabelConfig::new(10.0, 21.0, Dpi::Dpi203).with_margins(Margins::uniform(0.5));
        let l = LabelLayout::new([Slot::barcode(20)], BarcodeStyle::new(60, 1, 2), 9);
        let builder = LabelBuilder::new(config, l);
        let program = builder
            .program(&LabelContent::new("", "1234567890123", 1.0))
            .unwrap();
        let barcode = program
            .iter()
            .find_map(|op| match op {
                Op::Barcode(b) => Some(b),
                _ => None,
            })
            .unwrap();
        assert_eq!(barcode.position.x, 4);
    }

    #[test]
    fn test_build_many() {
        let builder = LabelBuilder::new(config(), layout());
        let contents = vec![
            LabelContent::new("Uno", "12345678", 1.0),
            LabelContent::new("Dos", "SKU-2", 2.0),
            LabelContent::new("Tres", "", 3.0),
        ];
        let program = builder.program_many(&contents).unwrap();
        assert_eq!(program.print_count(), 3);
        assert_eq!(
            program.iter().filter(|op| matches!(op, Op::Cls)).count(),
            3
        );
        assert_eq!(program.iter().filter(|op| matches!(op, Op::End)).count(), 1);
        assert_eq!(program.ops.last(), Some(&Op::End));
    }

    #[test]
    fn test_build_many_empty_is_error() {
        let builder = LabelBuilder::new(config(), layout());
        assert!(matches!(
            builder.build_many(&[]),
            Err(EtiquetaError::InvalidCommand(_))
        ));
    }

    #[test]
    fn test_invalid_config_fails_before_emitting() {
        let bad = LabelConfig::new(-5.0, 25.0, Dpi::Dpi203);
        let result = build(&bad, &LabelContent::new("A", "", 1.0), &layout());
        assert!(matches!(result, Err(EtiquetaError::Config(_))));
    }

    #[test]
    fn test_custom_estimator() {
        let wide_font = TableEstimator::new(FontTable {
            widths: [10, 20, 30, 40, 50],
            reference_dpi: Dpi::Dpi203,
        });
        let builder = LabelBuilder::new(config(), layout()).with_estimator(wide_font);
        let program = builder.program(&LabelContent::new("ABCD", "", 1.0)).unwrap();
        // 4 * 20 = 80, (408 - 80) / 2 = 164
        assert_eq!(texts(&program)[0].position.x, 164);
    }

    #[test]
    fn test_forced_code39() {
        let mut l = layout();
        l.barcode = l.barcode.with_symbology(Symbology::Code39);
        let builder = LabelBuilder::new(config(), l);
        let stream = builder.build(&LabelContent::new("A", "ABC-1", 1.0)).unwrap();
        // max(100, 55) modules * 2 = 200, (408 - 200) / 2 = 104
        assert!(stream.as_str().contains("BARCODE 104,34,\"39\",70,2,0,2,2,\"ABC-1\""));
    }

    #[test]
    fn test_rotated_slots() {
        let config = config().with_margins(Margins::uniform(1.0));
        let l = LabelLayout::new(
            [
                Slot::name(8, FontTier::Two).rotated(Rotation::Deg90),
                Slot::price(134, FontTier::Three).rotated(Rotation::Deg180),
                Slot::barcode(34).rotated(Rotation::Deg270),
            ],
            BarcodeStyle::new(70, 2, 2),
            30,
        );
        let stream = LabelBuilder::new(config, l)
            .build(&LabelContent::new("AB", "1234567890123", 29.99))
            .unwrap();
        let text = stream.as_str();
        // sideways elements start at the left margin
        assert!(text.contains("TEXT 8,8,\"2\",90,1,1,\"AB\""), "{}", text);
        assert!(text.contains("BARCODE 8,34,\"EAN13\",70,2,270,2,2,\"1234567890123\""));
        // upside down text is still centered: (392 - 96) / 2 + 8 = 156
        assert!(text.contains("TEXT 156,134,\"3\",180,1,1,\"$29.99\""));
    }

    #[test]
    fn test_copies() {
        let builder = LabelBuilder::new(config(), layout()).with_copies(3);
        let stream = builder.build(&LabelContent::new("A", "", 1.0)).unwrap();
        assert!(stream.as_str().contains("PRINT 3\r\nEND\r\n"));
    }

    #[test]
    fn test_unknown_preset() {
        assert!(matches!(
            render("99x99", &LabelContent::new("A", "", 1.0)),
            Err(EtiquetaError::UnknownPreset(_))
        ));
    }
}
