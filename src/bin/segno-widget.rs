use segno::widget;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    widget::run()
}
