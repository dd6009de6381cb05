use chrono::Local;
use clap::Parser;
use timesheet::application::{
    BrowseTimesheetService, ConfigService, CreateTimesheetService, ProjectService,
};
use timesheet::cli::{format_config, format_project_list, format_timesheet_list, Cli, Commands};
use timesheet::error::TimesheetError;
use timesheet::infrastructure::logging::init_tracing;
use timesheet::infrastructure::{
    resolve_base_dir, Config, JsonProjectRegistry, ProcessRunner, TimesheetStore,
};

fn main() {
    init_tracing();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("{}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), TimesheetError> {
    let root = resolve_base_dir(cli.dir.as_deref())?;
    let runner = ProcessRunner;

    match cli.command {
        Commands::AddProject { name } => {
            let service = ProjectService::new(JsonProjectRegistry::new(root));
            let added = service.add(&name)?;
            println!("Project {} has been added.", added);
            Ok(())
        }
        Commands::DeleteProject { name } => {
            let service = ProjectService::new(JsonProjectRegistry::new(root));
            let removed = service.delete(&name)?;
            println!("Project {} has been deleted.", removed);
            Ok(())
        }
        Commands::ListProjects => {
            let service = ProjectService::new(JsonProjectRegistry::new(root));
            print!("{}", format_project_list(&service.list()?));
            Ok(())
        }
        Commands::Create { when, no_edit } => {
            let config = Config::load_from_dir(&root)?;
            let service = CreateTimesheetService::new(
                TimesheetStore::new(root.clone()),
                JsonProjectRegistry::new(root),
                config,
                &runner,
            );
            let entry = service.execute(&when, Local::now().date_naive(), !no_edit)?;
            println!("Timesheet {} has been created.", entry.filename());
            Ok(())
        }
        Commands::List => {
            let store = TimesheetStore::new(root);
            print!("{}", format_timesheet_list(&store.list()?));
            Ok(())
        }
        Commands::Show { id } => {
            let config = Config::load_from_dir(&root)?;
            let service = BrowseTimesheetService::new(TimesheetStore::new(root), config, &runner);
            print!("{}", service.show(id.as_deref())?);
            Ok(())
        }
        Commands::Edit { id } => {
            let config = Config::load_from_dir(&root)?;
            let service = BrowseTimesheetService::new(TimesheetStore::new(root), config, &runner);
            service.edit(id.as_deref())?;
            Ok(())
        }
        Commands::Open { id } => {
            let config = Config::load_from_dir(&root)?;
            let service = BrowseTimesheetService::new(TimesheetStore::new(root), config, &runner);
            service.open(id.as_deref())?;
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(root);

            if list {
                print!("{}", format_config(&service.list()?));
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: timesheet config [--list | <key> [<value>]]");
                println!("Valid keys: {}", Config::KEYS.join(", "));
                Ok(())
            }
        }
    }
}
