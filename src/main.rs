// ==========================================
// Little 定律工厂运营公式库 - 命令行入口
// ==========================================
// 用法:
//   littles-law <operation> <arg>...
//   littles-law --json '<request json>'
//   littles-law --help
// ==========================================
// 输出: stdout 为 JSON 结果；stderr 为错误负载与日志
// 退出码: 0 成功 / 1 计算或请求错误 / 2 用法错误
// ==========================================

use anyhow::Context;
use littles_law::api::{ApiError, FormulaApi, FormulaRequest, OPERATIONS};
use littles_law::{logging, FormulaConfig, Operand};
use std::process::ExitCode;

fn print_usage() {
    eprintln!("{} v{}", littles_law::APP_NAME, littles_law::VERSION);
    eprintln!();
    eprintln!("用法:");
    eprintln!("  littles-law <operation> <arg>...");
    eprintln!("  littles-law --json '<request json>'");
    eprintln!();
    eprintln!("操作:");
    for (name, params) in OPERATIONS {
        eprintln!("  {:<22} {}", name, params);
    }
}

fn report_error(err: &ApiError) {
    let payload = err.to_payload();
    match serde_json::to_string(&payload) {
        Ok(json) => eprintln!("{}", json),
        Err(_) => eprintln!("{}", err),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let config = FormulaConfig::from_env().context("加载配置失败")?;
    logging::init_with_level(&config.log_level);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(first) = args.first() else {
        print_usage();
        return Ok(ExitCode::from(2));
    };

    let api = FormulaApi::new(config);

    let output = match first.as_str() {
        "-h" | "--help" => {
            print_usage();
            return Ok(ExitCode::SUCCESS);
        }
        "--json" => {
            let Some(raw) = args.get(1) else {
                print_usage();
                return Ok(ExitCode::from(2));
            };
            api.evaluate_json(raw)
        }
        operation => {
            let operands = args[1..].iter().map(|a| Operand::from_cli_arg(a)).collect();
            FormulaRequest::from_positional(operation, operands)
                .and_then(|request| api.evaluate(&request))
                .and_then(|response| api.to_json(&response))
        }
    };

    match output {
        Ok(json) => {
            println!("{}", json);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            tracing::debug!(error = %err, "计算失败");
            report_error(&err);
            Ok(ExitCode::from(1))
        }
    }
}
