use serde::{Deserialize, Serialize};

use crate::models::{Metric, Month};

/// Output language for everything printed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Ru,
    En,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    NoMonthlyReports,
    NoYearlyReport,
    ProfitSkipped,
    VerifySuccess,
    MostProfitable,
    BiggestExpense,
    Year,
    AverageExpense,
    AverageIncome,
    InvalidMonth,
    UnpairedRow,
    ReportUnavailable,
    MenuPrompt,
    MenuLoadMonthly,
    MenuLoadYearly,
    MenuVerify,
    MenuMonthlyInfo,
    MenuYearlyInfo,
    MenuExit,
    UnknownCommand,
    NotANumber,
    Goodbye,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::Ru => "ru",
            Lang::En => "en",
        }
    }

    pub fn month_name(self, month: Month) -> &'static str {
        const RU: [&str; 12] = [
            "Январь", "Февраль", "Март", "Апрель", "Май", "Июнь",
            "Июль", "Август", "Сентябрь", "Октябрь", "Ноябрь", "Декабрь",
        ];
        const EN: [&str; 12] = [
            "January", "February", "March", "April", "May", "June",
            "July", "August", "September", "October", "November", "December",
        ];
        let idx = month.number() as usize - 1;
        match self {
            Lang::Ru => RU[idx],
            Lang::En => EN[idx],
        }
    }

    pub fn text(self, msg: Msg) -> &'static str {
        match self {
            Lang::Ru => ru(msg),
            Lang::En => en(msg),
        }
    }

    /// `<amount> за "<name>"`
    pub fn amount_for(self, amount: i64, name: &str) -> String {
        match self {
            Lang::Ru => format!("{amount} за \"{name}\""),
            Lang::En => format!("{amount} for \"{name}\""),
        }
    }

    pub fn profit_for(self, month: Month, profit: i64) -> String {
        let name = self.month_name(month);
        match self {
            Lang::Ru => format!("Прибыль за {name}: {profit}"),
            Lang::En => format!("Profit for {name}: {profit}"),
        }
    }

    pub fn missing_in_yearly(self, month: Month) -> String {
        let name = self.month_name(month);
        match self {
            Lang::Ru => format!("В годовом отчёте нет данных за {name}."),
            Lang::En => format!("The yearly report has no data for {name}."),
        }
    }

    /// Header line followed by the monthly and the yearly figure.
    pub fn mismatch_lines(self, metric: Metric, month: Month, monthly: i64, yearly: i64) -> [String; 3] {
        let name = self.month_name(month);
        match (self, metric) {
            (Lang::Ru, Metric::Expenses) => [
                format!("Траты за {name} не совпадают в месячном и годовом отчётах."),
                format!("Траты, указанные в месячном отчёте: {monthly}"),
                format!("Траты, указанные в годовом отчёте за {name}: {yearly}"),
            ],
            (Lang::Ru, Metric::Incomes) => [
                format!("Прибыль за {name} не совпадает в месячном и годовом отчётах."),
                format!("Прибыль, указанная в месячном отчёте: {monthly}"),
                format!("Прибыль, указанная в годовом отчёте за {name}: {yearly}"),
            ],
            (Lang::En, Metric::Expenses) => [
                format!("Expenses for {name} differ between the monthly and yearly reports."),
                format!("Expenses in the monthly report: {monthly}"),
                format!("Expenses in the yearly report for {name}: {yearly}"),
            ],
            (Lang::En, Metric::Incomes) => [
                format!("Income for {name} differs between the monthly and yearly reports."),
                format!("Income in the monthly report: {monthly}"),
                format!("Income in the yearly report for {name}: {yearly}"),
            ],
        }
    }

    pub fn monthly_loaded(self, month: Month, rows: usize) -> String {
        let name = self.month_name(month);
        match self {
            Lang::Ru => format!("Месячный отчёт за {name} загружен, записей: {rows}"),
            Lang::En => format!("Loaded monthly report for {name}: {rows} rows"),
        }
    }

    pub fn yearly_loaded(self, year: i32, months: usize) -> String {
        match self {
            Lang::Ru => format!("Годовой отчёт за {year} загружен, месяцев: {months}"),
            Lang::En => format!("Loaded yearly report for {year}: {months} months"),
        }
    }

    pub fn load_failed(self, err: &dyn std::fmt::Display) -> String {
        match self {
            Lang::Ru => format!("Не удалось загрузить отчёт: {err}"),
            Lang::En => format!("Could not load report: {err}"),
        }
    }
}

fn ru(msg: Msg) -> &'static str {
    match msg {
        Msg::NoMonthlyReports => "Вы не добавили информацию о месячных отчётах.",
        Msg::NoYearlyReport => "Вы не добавили информацию о годовом отчёте.",
        Msg::ProfitSkipped => "Прибыль по месяцам в текущем году напечатана не будет.",
        Msg::VerifySuccess => "Проверка успешно пройдена.",
        Msg::MostProfitable => "Самый прибыльный продукт",
        Msg::BiggestExpense => "Самая большая трата",
        Msg::Year => "Год",
        Msg::AverageExpense => "Средний расход за все месяцы в году",
        Msg::AverageIncome => "Средний доход за все месяцы в году",
        Msg::InvalidMonth => "Ошибка! Номер месяца должен быть в диапазоне [1, 12].",
        Msg::UnpairedRow => "Последняя строка годового отчёта без пары и не учтена.",
        Msg::ReportUnavailable => {
            "Невозможно прочитать файл с отчётом. Возможно, файл не находится в нужной директории."
        }
        Msg::MenuPrompt => "Что Вы хотите сделать?",
        Msg::MenuLoadMonthly => "1 - Считать все месячные отчёты.",
        Msg::MenuLoadYearly => "2 - Считать годовой отчёт.",
        Msg::MenuVerify => "3 - Сверить отчёты.",
        Msg::MenuMonthlyInfo => "4 - Вывести информацию о всех месячных отчётах.",
        Msg::MenuYearlyInfo => "5 - Вывести информацию о годовом отчёте.",
        Msg::MenuExit => "0 - Выйти из программы.",
        Msg::UnknownCommand => "Такой команды в программе нет.",
        Msg::NotANumber => "Введите номер команды.",
        Msg::Goodbye => "Программа завершена.",
    }
}

fn en(msg: Msg) -> &'static str {
    match msg {
        Msg::NoMonthlyReports => "No monthly reports have been loaded.",
        Msg::NoYearlyReport => "No yearly report has been loaded.",
        Msg::ProfitSkipped => "Profit by month will not be printed for this year.",
        Msg::VerifySuccess => "Verification passed.",
        Msg::MostProfitable => "Most profitable product",
        Msg::BiggestExpense => "Biggest expense",
        Msg::Year => "Year",
        Msg::AverageExpense => "Average monthly expense for the year",
        Msg::AverageIncome => "Average monthly income for the year",
        Msg::InvalidMonth => "Error! Month number must be in the range [1, 12].",
        Msg::UnpairedRow => "The last row of the yearly report has no pair and was ignored.",
        Msg::ReportUnavailable => {
            "Cannot read the report file. It may not be in the reports directory."
        }
        Msg::MenuPrompt => "What would you like to do?",
        Msg::MenuLoadMonthly => "1 - Load all monthly reports.",
        Msg::MenuLoadYearly => "2 - Load the yearly report.",
        Msg::MenuVerify => "3 - Reconcile reports.",
        Msg::MenuMonthlyInfo => "4 - Show monthly report information.",
        Msg::MenuYearlyInfo => "5 - Show yearly report information.",
        Msg::MenuExit => "0 - Exit.",
        Msg::UnknownCommand => "There is no such command.",
        Msg::NotANumber => "Enter a command number.",
        Msg::Goodbye => "Goodbye.",
    }
}
