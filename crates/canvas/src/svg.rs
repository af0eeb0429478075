use crate::draw::{Color, DrawOp, Drawing, Pen, Point};

pub fn generate_string(drawing: &Drawing) -> String {
    let mut generator = Generator::new(&drawing.font_family);
    generator.generate(drawing);
    generator.svg
}

struct Generator {
    svg: String,
    pen: Pen,
    font_family: String,
}

impl Generator {
    fn new(font_family: &str) -> Self {
        Self {
            svg: String::new(),
            pen: Pen::default(),
            font_family: family_list(font_family),
        }
    }

    fn generate(&mut self, drawing: &Drawing) {
        self.start_svg(drawing.width, drawing.height);
        self.add_background();

        for op in &drawing.ops {
            if self.pen.apply(op) {
                continue;
            }
            match op {
                DrawOp::Line { from, to } => self.add_line(*from, *to),
                DrawOp::Rect {
                    origin,
                    width,
                    height,
                } => self.add_rect(*origin, (*width, *height)),
                DrawOp::Text { pos, text } => self.add_text(*pos, text),
                DrawOp::SetColor(_) | DrawOp::SetLineWidth(_) | DrawOp::SetFontSize(_) => {}
            }
        }

        self.end_svg();
    }

    fn add_line(&mut self, from: Point, to: Point) {
        let x1y1 = format!("x1=\"{}\" y1=\"{}\"", from.0, from.1);
        let x2y2 = format!("x2=\"{}\" y2=\"{}\"", to.0, to.1);
        let style = format!(
            "{} stroke-width=\"{}\" stroke-linecap=\"butt\"",
            stroke_style(&self.pen.color),
            self.pen.line_width
        );
        self.svg += &format!("<line {} {} {} />\n", x1y1, x2y2, style);
    }

    fn add_rect(&mut self, origin: Point, dims: (f64, f64)) {
        let pos = format!("x=\"{}\" y=\"{}\"", origin.0, origin.1);
        let dim = format!("width=\"{}\" height=\"{}\"", dims.0, dims.1);
        let style = format!(
            "fill=\"none\" {} stroke-width=\"{}\"",
            stroke_style(&self.pen.color),
            self.pen.line_width
        );
        self.svg += &format!("<rect {} {} {} />\n", pos, dim, style);
    }

    fn add_text(&mut self, pos: Point, text: &str) {
        let point = format!("x=\"{}\" y=\"{}\"", pos.0, pos.1);
        let font = format!(
            "font-family=\"{}\" font-size=\"{}px\"",
            self.font_family, self.pen.font_size
        );
        let fill = format!(
            "fill=\"{}\" fill-opacity=\"{}\"",
            self.pen.color, self.pen.color.alpha
        );
        self.svg += &format!(
            "<text {} {} {} xml:space=\"preserve\">{}</text>\n",
            point,
            font,
            fill,
            escape(text)
        );
    }

    fn start_svg(&mut self, width: u32, height: u32) {
        self.svg += "<?xml version=\"1.0\"?>\n";
        self.svg += r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" "#;
        self.svg += &format!(
            "width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n",
            width, height, width, height
        );
    }

    fn end_svg(&mut self) {
        self.svg += "</svg>\n";
    }

    fn add_background(&mut self) {
        self.svg += "<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n";
    }
}

// Unknown families fall back to sans-serif, which resolves to the bundled face
fn family_list(font_family: &str) -> String {
    match font_family {
        "serif" | "sans-serif" | "monospace" | "cursive" | "fantasy" => {
            format!("{}, sans-serif", font_family)
        }
        _ => format!("'{}', sans-serif", escape(font_family)),
    }
}

fn stroke_style(color: &Color) -> String {
    format!("stroke=\"{}\" stroke-opacity=\"{}\"", color, color.alpha)
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_drawing() -> Drawing {
        let mut drawing = Drawing::new(1100, 400);
        drawing.push(DrawOp::SetLineWidth(50.0));
        drawing.push(DrawOp::SetColor(Color::rgb(0.0, 0.6, 1.0).with_alpha(0.5)));
        drawing.push(DrawOp::Line {
            from: (50.0, 100.0),
            to: (52.0, 100.0),
        });
        drawing.push(DrawOp::SetColor(Color::BLACK));
        drawing.push(DrawOp::SetLineWidth(1.0));
        drawing.push(DrawOp::Rect {
            origin: (40.0, 140.0),
            width: 760.0,
            height: 200.0,
        });
        drawing.push(DrawOp::SetFontSize(15.0));
        drawing.push(DrawOp::Text {
            pos: (50.0, 60.0),
            text: "gene <1> & co".to_string(),
        });
        drawing
    }

    #[test]
    fn svg_has_canvas_dimensions_and_background() {
        let svg = generate_string(&example_drawing());
        assert!(svg.contains(r#"width="1100" height="400" viewBox="0 0 1100 400""#));
        assert!(svg.contains(r#"<rect width="100%" height="100%" fill="white"/>"#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn lines_carry_pen_width_and_opacity() {
        let svg = generate_string(&example_drawing());
        assert!(svg.contains(
            r##"<line x1="50" y1="100" x2="52" y2="100" stroke="#0099FF" stroke-opacity="0.5" stroke-width="50" stroke-linecap="butt" />"##
        ));
    }

    #[test]
    fn rectangles_are_outlined() {
        let svg = generate_string(&example_drawing());
        assert!(svg.contains(
            r##"<rect x="40" y="140" width="760" height="200" fill="none" stroke="#000000" stroke-opacity="1" stroke-width="1" />"##
        ));
    }

    #[test]
    fn text_is_escaped() {
        let svg = generate_string(&example_drawing());
        assert!(svg.contains("gene &lt;1&gt; &amp; co"));
        assert!(svg.contains(r#"font-size="15px""#));
        assert!(svg.contains(r#"font-family="'DejaVu Sans', sans-serif""#));
    }

    #[test]
    fn font_family_is_applied() {
        let mut drawing = example_drawing();
        drawing.set_font_family("monospace");
        let svg = generate_string(&drawing);
        assert!(svg.contains(r#"font-family="monospace, sans-serif""#));
    }
}
