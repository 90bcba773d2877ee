use retag_lib::syntax::unicode;

pub struct CategoriesArgs {
    pub json: bool,
}

pub fn run(args: CategoriesArgs) {
    let names: Vec<&str> = unicode::categories().collect();

    if args.json {
        match serde_json::to_string_pretty(&names) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    println!("Unicode categories ({}):", names.len());
    for name in names {
        println!("  {}", name);
    }
}
