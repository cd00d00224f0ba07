mod scene;

fn main() -> anyhow::Result<()> {
    scene::run()
}
