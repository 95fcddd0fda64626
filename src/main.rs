use bloodaxe::error::AppResult;

fn main() -> AppResult<()> {
    bloodaxe::entry::run()
}
