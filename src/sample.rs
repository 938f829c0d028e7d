//! Built-in sample dataset.
//!
//! Mirrors the office's reference data: ten contracts with end dates
//! relative to `today`, four dotações, nine transactions booked across
//! fiscal 2025/2026 and seven suppliers. Used by the CLI when no dataset
//! file is given, and by the test suite.

use crate::model::{
    Amount, BudgetUnit, Contract, ContractStatus, Dataset, Dotacao, Supplier, SupplierStatus,
    Transaction, TransactionType,
};
use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Amount from integer centavos.
fn amount(cents: i64) -> Amount {
    Amount::new(Decimal::new(cents, 2))
}

fn relative(today: NaiveDate, days: i64) -> NaiveDate {
    if days >= 0 {
        today + Days::new(days as u64)
    } else {
        today - Days::new(days.unsigned_abs())
    }
}

#[allow(clippy::too_many_arguments)]
fn contract(
    id: &str,
    number: &str,
    supplier_name: &str,
    status: ContractStatus,
    end_date: NaiveDate,
    total_cents: i64,
    budget_cents: i64,
    commitment_cents: i64,
) -> Contract {
    Contract {
        id: id.to_string(),
        number: number.to_string(),
        supplier_name: supplier_name.to_string(),
        status,
        end_date,
        total_value: amount(total_cents),
        budget_balance: amount(budget_cents),
        commitment_balance: amount(commitment_cents),
    }
}

#[allow(clippy::too_many_arguments)]
fn transaction(
    id: &str,
    description: &str,
    contract_number: &str,
    commitment_ref: &str,
    date: NaiveDate,
    kind: TransactionType,
    cents: i64,
    budget_description: &str,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        description: description.to_string(),
        contract_id: contract_number.to_string(),
        commitment_ref: commitment_ref.to_string(),
        date,
        kind,
        amount: amount(cents),
        department: "FADEP".to_string(),
        budget_description: budget_description.to_string(),
    }
}

fn supplier(
    id: &str,
    name: &str,
    trade_name: &str,
    tax_id: &str,
    email: &str,
    phone: &str,
    status: SupplierStatus,
    category: &str,
    since: NaiveDate,
) -> Supplier {
    Supplier {
        id: id.to_string(),
        name: name.to_string(),
        trade_name: trade_name.to_string(),
        tax_id: tax_id.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        status,
        category: Some(category.to_string()),
        address: None,
        since,
    }
}

impl Dataset {
    /// Builds the sample dataset. Contract end dates are relative to
    /// `today`; transaction and dotação dates are fixed.
    pub fn sample(today: NaiveDate) -> Dataset {
        use ContractStatus::{Rescindido, Vigente};
        use TransactionType::{Cancellation, Commitment, Liquidation, Reinforcement};

        let contracts = vec![
            contract(
                "1",
                "124/2024",
                "Gartner do Brasil Serviços de Pesquisa Ltda.",
                Rescindido,
                relative(today, -30),
                50_000_000,
                0,
                0,
            ),
            contract(
                "2",
                "087/2025",
                "Intelliway Tecnologia Ltda",
                Vigente,
                relative(today, 180),
                12_000_000,
                5_000_000,
                2_000_000,
            ),
            contract(
                "3",
                "074/2025",
                "MOL Mediação Online Assessoria",
                Vigente,
                relative(today, 310),
                8_500_000,
                8_500_000,
                0,
            ),
            contract(
                "4",
                "0080/2025",
                "Starlink Telespazio Brasil S/A",
                Vigente,
                relative(today, 720),
                250_000_000,
                200_000_000,
                50_000_000,
            ),
            contract(
                "5",
                "121/2022",
                "Lebre Tecnologia e Informática",
                Vigente,
                relative(today, 15),
                6_000_000,
                100_000,
                6_000_000,
            ),
            contract(
                "6",
                "064/2025",
                "Sistemas Convex Locações",
                Vigente,
                relative(today, 300),
                4_500_000,
                2_000_000,
                1_000_000,
            ),
            contract(
                "7",
                "135/2021",
                "Technocopy Ltda.",
                Vigente,
                relative(today, 120),
                1_500_000,
                500_000,
                500_000,
            ),
            contract(
                "8",
                "007/2025",
                "Telefônica Brasil S/A (Vivo)",
                Vigente,
                relative(today, 400),
                98_000_000,
                40_000_000,
                10_000_000,
            ),
            contract(
                "9",
                "099/2026",
                "Leistung Equipamentos",
                Vigente,
                relative(today, 500),
                27_200_000,
                15_200_000,
                12_000_000,
            ),
            contract(
                "10",
                "101/2026",
                "DB3 Telecom",
                Vigente,
                relative(today, 600),
                89_581_500,
                89_581_500,
                0,
            ),
        ];

        let dotacoes = vec![
            Dotacao {
                id: "1".to_string(),
                description: "01/2025 - MOL Mediação Online".to_string(),
                sei_ref: "0000949.110000931.0.2025".to_string(),
                tax_id: "23.506.000/0001-50".to_string(),
                date: ymd(2025, 1, 15),
                total_amount: amount(9_292_500),
                used_amount: amount(9_292_500),
                unit: BudgetUnit::Fadep,
                contract_id: "3".to_string(),
            },
            Dotacao {
                id: "2".to_string(),
                description: "02/2026 - Intelliway Tecnologia".to_string(),
                sei_ref: "0000950.110000932.0.2026".to_string(),
                tax_id: "12.345.678/0001-90".to_string(),
                date: ymd(2026, 1, 10),
                total_amount: amount(29_407_840),
                used_amount: amount(5_000_000),
                unit: BudgetUnit::Fadep,
                contract_id: "2".to_string(),
            },
            Dotacao {
                id: "3".to_string(),
                description: "03/2026 - Leistung Equipamentos".to_string(),
                sei_ref: "0000951.110000933.0.2026".to_string(),
                tax_id: "98.765.432/0001-10".to_string(),
                date: ymd(2026, 2, 20),
                total_amount: amount(27_200_000),
                used_amount: amount(12_000_000),
                unit: BudgetUnit::Defensoria,
                contract_id: "9".to_string(),
            },
            Dotacao {
                id: "4".to_string(),
                description: "04/2026 - DB3 Telecom".to_string(),
                sei_ref: "0000952.110000934.0.2026".to_string(),
                tax_id: "11.222.333/0001-44".to_string(),
                date: ymd(2026, 3, 5),
                total_amount: amount(89_581_500),
                used_amount: amount(0),
                unit: BudgetUnit::Defensoria,
                contract_id: "10".to_string(),
            },
        ];

        let transactions = vec![
            transaction(
                "1",
                "Pagamento Fornecedor",
                "087/2025",
                "2025NE000195",
                ymd(2025, 12, 12),
                Liquidation,
                19_614,
                "02/2026 - Intelliway Tecnologia",
            ),
            transaction(
                "2",
                "Cancelamento Saldo",
                "087/2025",
                "2025NE000472",
                ymd(2025, 12, 12),
                Cancellation,
                4_350_341,
                "02/2026 - Intelliway Tecnologia",
            ),
            transaction(
                "t4",
                "Empenho Estimativo",
                "087/2025",
                "2026NE055",
                ymd(2026, 1, 10),
                Commitment,
                5_000_000,
                "02/2026 - Intelliway Tecnologia",
            ),
            transaction(
                "t5",
                "Reforço de Dotação",
                "087/2025",
                "N/A",
                ymd(2026, 2, 10),
                Reinforcement,
                24_407_840,
                "02/2026 - Intelliway Tecnologia",
            ),
            transaction(
                "t1",
                "Empenho Inicial Global",
                "074/2025",
                "2025NE001",
                ymd(2025, 1, 15),
                Commitment,
                9_292_500,
                "01/2025 - MOL Mediação Online",
            ),
            transaction(
                "3",
                "Reforço de Dotação",
                "074/2025",
                "2025NE000398",
                ymd(2025, 11, 27),
                Reinforcement,
                2_323_125,
                "01/2025 - MOL Mediação Online",
            ),
            transaction(
                "5",
                "Pagamento Fornecedor",
                "074/2025",
                "2025NE000183",
                ymd(2025, 12, 2),
                Liquidation,
                2_323_125,
                "01/2025 - MOL Mediação Online",
            ),
            transaction(
                "t2",
                "Pagamento Nota Fiscal 001",
                "074/2025",
                "2025NE001",
                ymd(2025, 2, 5),
                Liquidation,
                4_000_000,
                "01/2025 - MOL Mediação Online",
            ),
            transaction(
                "6",
                "Empenho Inicial",
                "124/2024",
                "2025NE000183",
                ymd(2025, 7, 31),
                Commitment,
                9_292_500,
                "01/2025 - Outros",
            ),
        ];

        let suppliers = vec![
            supplier(
                "1",
                "Gartner do Brasil Serviços de Pesquisa Ltda.",
                "Gartner",
                "02.511.233/0001-90",
                "contato@gartner.com",
                "(11) 3000-0000",
                SupplierStatus::Inactive,
                "Consultoria",
                ymd(2022, 2, 10),
            ),
            supplier(
                "2",
                "Intelliway Tecnologia Ltda",
                "Intelliway",
                "12.345.678/0001-90",
                "comercial@intelliway.com.br",
                "(61) 3333-4444",
                SupplierStatus::Active,
                "Tecnologia",
                ymd(2023, 6, 15),
            ),
            supplier(
                "3",
                "MOL Mediação Online Assessoria",
                "MOL Mediação",
                "23.506.000/0001-50",
                "financeiro@mol.com.br",
                "(11) 99999-8888",
                SupplierStatus::Active,
                "Serviços Jurídicos",
                ymd(2024, 1, 5),
            ),
            supplier(
                "4",
                "Starlink Telespazio Brasil S/A",
                "Starlink",
                "44.555.666/0001-11",
                "enterprise@starlink.com",
                "0800 123 4567",
                SupplierStatus::Active,
                "Telecomunicações",
                ymd(2024, 3, 20),
            ),
            supplier(
                "5",
                "Leistung Equipamentos",
                "Leistung",
                "98.765.432/0001-10",
                "vendas@leistung.com.br",
                "(47) 3333-2222",
                SupplierStatus::Active,
                "Equipamentos",
                ymd(2024, 7, 1),
            ),
            supplier(
                "6",
                "DB3 Telecom",
                "DB3",
                "11.222.333/0001-44",
                "contato@db3.com.br",
                "(85) 3300-1010",
                SupplierStatus::Active,
                "Telecomunicações",
                ymd(2025, 1, 10),
            ),
            supplier(
                "7",
                "Telefônica Brasil S/A (Vivo)",
                "Vivo Empresas",
                "02.558.157/0001-62",
                "gov@vivo.com.br",
                "103 15",
                SupplierStatus::Active,
                "Telecomunicações",
                ymd(2020, 1, 1),
            ),
        ];

        Dataset {
            contracts,
            dotacoes,
            transactions,
            suppliers,
        }
    }
}
