//! `challankit` command-line entry point: interactive challan generation
//! over flat-file master data.

mod prompt;
mod viewer;

use std::collections::BTreeMap;
use std::error::Error;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Local;
use clap::{Parser, Subcommand};

use challankit_challan::{ChallanWriter, SpecChallanRequest, SpecLineItem};
use challankit_store::{
    RecordStore, SequenceCounter, SpecCompanyRecord, SpecDataPaths, SpecTransportRecord,
};

#[derive(Parser)]
#[command(
    name = "challankit",
    about = "Record transport master data and generate printable challan spreadsheets"
)]
struct Cli {
    /// Master data directory (company/transport records, counter).
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Output directory for generated challans.
    #[arg(long, default_value = "generated_challans")]
    out_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a challan interactively
    Generate {
        /// Do not open the saved file in the platform viewer
        #[arg(long)]
        no_open: bool,
    },
    /// Record or update a company
    AddCompany,
    /// Record or update a transport
    AddTransport,
    /// List known company names
    ListCompanies,
    /// List known transport names
    ListTransports,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let paths = SpecDataPaths::derive(&cli.data_dir)?;
    let stdin = io::stdin();
    let mut reader = stdin.lock();

    match cli.command {
        Commands::Generate { no_open } => run_generate(&mut reader, &paths, cli.out_dir, no_open),
        Commands::AddCompany => run_add_company(&mut reader, &paths),
        Commands::AddTransport => run_add_transport(&mut reader, &paths),
        Commands::ListCompanies => {
            let store = RecordStore::<SpecCompanyRecord>::new(paths.path_file_company.clone());
            print_names("companies", &store.load()?);
            Ok(())
        }
        Commands::ListTransports => {
            let store = RecordStore::<SpecTransportRecord>::new(paths.path_file_transport.clone());
            print_names("transports", &store.load()?);
            Ok(())
        }
    }
}

fn run_generate(
    reader: &mut impl BufRead,
    paths: &SpecDataPaths,
    path_dir_out: PathBuf,
    if_no_open: bool,
) -> Result<(), Box<dyn Error>> {
    let store_company = RecordStore::<SpecCompanyRecord>::new(paths.path_file_company.clone());
    let store_transport =
        RecordStore::<SpecTransportRecord>::new(paths.path_file_transport.clone());
    let mut dict_companies = store_company.load()?;
    let mut dict_transports = store_transport.load()?;

    let name_company = prompt::prompt_text_required(reader, "Enter company name: ")?.to_uppercase();
    if !dict_companies.contains_key(&name_company) {
        println!("Company {name_company} not found. Adding new company.");
        let record = prompt_company_record(reader)?;
        dict_companies.insert(name_company.clone(), record);
        store_company.save(&dict_companies)?;
    }

    let name_transport =
        prompt::prompt_text_required(reader, "Enter transport name: ")?.to_uppercase();
    if !dict_transports.contains_key(&name_transport) {
        println!("Transport {name_transport} not found. Adding new transport.");
        let record = prompt_transport_record(reader)?;
        dict_transports.insert(name_transport.clone(), record);
        store_transport.save(&dict_transports)?;
    }

    let mut l_items = Vec::new();
    loop {
        let name_item = prompt::prompt_text(reader, "Enter item name (or leave blank to finish): ")?;
        if name_item.is_empty() {
            break;
        }
        let code_hsn = prompt::prompt_text_required(reader, &format!("Enter HSN for {name_item}: "))?;
        let cnt_pieces: u32 =
            prompt::prompt_number(reader, &format!("Enter number of pieces for {name_item}: "))?;
        let amount: u64 = prompt::prompt_number(reader, &format!("Enter amount for {name_item}: "))?;
        l_items.push(SpecLineItem {
            name_item,
            code_hsn,
            cnt_pieces,
            amount: amount as i64,
        });
    }

    let discount: i64 = prompt::prompt_number(reader, "Enter discount: ")?;
    let gst: i64 = prompt::prompt_number(reader, "Enter GST: ")?;

    let date_default = Local::now().format("%d.%m.%y").to_string();
    let date_entered =
        prompt::prompt_text(reader, &format!("Enter date (DD.MM.YY) [{date_default}]: "))?;
    let date = if date_entered.is_empty() {
        date_default
    } else {
        date_entered
    };

    let contact_no = prompt::prompt_text_required(reader, "Enter contact number: ")?;
    let cnt_goods_other_party: u64 =
        prompt::prompt_number(reader, "Enter other party goods count: ")?;
    let amount_goods_other_party: u64 =
        prompt::prompt_number(reader, "Enter other party goods amount: ")?;

    // One counter step per document; the value doubles as the challan number.
    let counter = SequenceCounter::new(paths.path_file_counter.clone());
    let n_counter = counter.next()?;

    let request = SpecChallanRequest {
        name_company: name_company.clone(),
        name_transport: name_transport.clone(),
        contact_no,
        items: l_items,
        discount,
        gst,
        date,
        challan_no: n_counter.to_string(),
        cnt_goods_other_party,
        amount_goods_other_party: amount_goods_other_party as i64,
    };

    let mut writer = ChallanWriter::new(path_dir_out);
    if !if_no_open {
        writer = writer.with_post_save_hook(|path| viewer::open_in_viewer(path));
    }

    let outcome = writer.write_challan(
        &request,
        dict_companies.get(&name_company),
        dict_transports.get(&name_transport),
        n_counter,
    )?;

    for warning in &outcome.report.warnings {
        println!("Warning: {warning}");
    }
    println!("Challan saved as {}", outcome.path_file_out.display());
    Ok(())
}

fn run_add_company(
    reader: &mut impl BufRead,
    paths: &SpecDataPaths,
) -> Result<(), Box<dyn Error>> {
    let store = RecordStore::<SpecCompanyRecord>::new(paths.path_file_company.clone());
    let mut dict_records = store.load()?;

    let name = prompt::prompt_text_required(reader, "Enter company name: ")?.to_uppercase();
    let record = prompt_company_record(reader)?;
    dict_records.insert(name.clone(), record);
    store.save(&dict_records)?;

    println!("Company {name} recorded.");
    Ok(())
}

fn run_add_transport(
    reader: &mut impl BufRead,
    paths: &SpecDataPaths,
) -> Result<(), Box<dyn Error>> {
    let store = RecordStore::<SpecTransportRecord>::new(paths.path_file_transport.clone());
    let mut dict_records = store.load()?;

    let name = prompt::prompt_text_required(reader, "Enter transport name: ")?.to_uppercase();
    let record = prompt_transport_record(reader)?;
    dict_records.insert(name.clone(), record);
    store.save(&dict_records)?;

    println!("Transport {name} recorded.");
    Ok(())
}

fn prompt_company_record(reader: &mut impl BufRead) -> io::Result<SpecCompanyRecord> {
    Ok(SpecCompanyRecord {
        address1: prompt::prompt_text_required(reader, "Enter company address(1): ")?,
        address2: prompt::prompt_text(reader, "Enter company address(2): ")?,
        gst: prompt::prompt_text_required(reader, "Enter GSTIN: ")?,
    })
}

fn prompt_transport_record(reader: &mut impl BufRead) -> io::Result<SpecTransportRecord> {
    Ok(SpecTransportRecord {
        station: prompt::prompt_text_required(reader, "Enter station: ")?.to_uppercase(),
        gst: prompt::prompt_text_required(reader, "Enter transport GST: ")?,
        way: prompt::prompt_text_required(reader, "Enter transport way: ")?.to_uppercase(),
    })
}

fn print_names<T>(label: &str, dict_records: &BTreeMap<String, T>) {
    if dict_records.is_empty() {
        println!("No {label} recorded yet.");
        return;
    }
    for name in dict_records.keys() {
        println!("{name}");
    }
}
