// ==========================================
// 测试数据生成器
// ==========================================
// 用途: 生成员工对照表与打卡日志样例
// 输出: tests/fixtures/datasets/*.csv / *.dat
// ==========================================

use chrono::{Duration, NaiveDate, NaiveDateTime};
use csv::Writer;
use std::error::Error;
use std::fs::{self, File};
use std::io::{BufWriter, Write};

const OUTPUT_DIR: &str = "tests/fixtures/datasets";

// 员工数 / 天数
const EMPLOYEE_COUNT: i64 = 50;
const DAYS: i64 = 30;

const FIRST_NAMES: &[&str] = &["Ahmed", "Sara", "Omar", "Mona", "Youssef", "Nour", "Karim", "Laila"];
const FIRST_NAMES_AR: &[&str] = &["أحمد", "سارة", "عمر", "منى", "يوسف", "نور", "كريم", "ليلى"];

fn employee_code(index: i64) -> i64 {
    1000 + index
}

fn base_date() -> Result<NaiveDate, Box<dyn Error>> {
    NaiveDate::from_ymd_opt(2025, 1, 1).ok_or_else(|| "invalid base date".into())
}

fn at(date: NaiveDate, hour: u32, minute: u32) -> Result<NaiveDateTime, Box<dyn Error>> {
    date.and_hms_opt(hour, minute, 0)
        .ok_or_else(|| format!("invalid time {}:{}", hour, minute).into())
}

/// 考勤机行格式: 工号 日期 时间 设备字段...
fn punch_line(code: i64, ts: NaiveDateTime) -> String {
    format!("{:>9}\t{}\t1\t0\t1\t0", code, ts.format("%Y-%m-%d %H:%M:%S"))
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("开始生成测试数据集...");
    fs::create_dir_all(OUTPUT_DIR)?;

    // 1. 英文表头对照表
    generate_codes_en()?;

    // 2. 阿拉伯文表头对照表
    generate_codes_ar()?;

    // 3. 缺列对照表
    generate_codes_missing_columns()?;

    // 4. 正常打卡（早晚班轮换）
    generate_normal_punches()?;

    // 5. 含缺卡的打卡
    generate_single_punches()?;

    // 6. 含坏行的打卡
    generate_malformed_punches()?;

    println!("✓ 所有测试数据集生成完成！");
    Ok(())
}

fn generate_codes_en() -> Result<(), Box<dyn Error>> {
    let path = format!("{}/01_codes_en.csv", OUTPUT_DIR);
    let mut wtr = Writer::from_writer(File::create(&path)?);

    wtr.write_record(["Emp Code", "Employee Name", "Department"])?;
    for i in 0..EMPLOYEE_COUNT {
        let name = format!("{} {}", FIRST_NAMES[(i as usize) % FIRST_NAMES.len()], i);
        let dept = if i % 2 == 0 { "Production" } else { "Logistics" };
        wtr.write_record([employee_code(i).to_string(), name, dept.to_string()])?;
    }

    wtr.flush()?;
    println!("✓ 生成 01_codes_en.csv ({}条)", EMPLOYEE_COUNT);
    Ok(())
}

fn generate_codes_ar() -> Result<(), Box<dyn Error>> {
    let path = format!("{}/02_codes_ar.csv", OUTPUT_DIR);
    let mut wtr = Writer::from_writer(File::create(&path)?);

    wtr.write_record(["الكود", "الاسم"])?;
    for i in 0..EMPLOYEE_COUNT {
        let name = FIRST_NAMES_AR[(i as usize) % FIRST_NAMES_AR.len()];
        wtr.write_record([employee_code(i).to_string(), name.to_string()])?;
    }

    wtr.flush()?;
    println!("✓ 生成 02_codes_ar.csv ({}条)", EMPLOYEE_COUNT);
    Ok(())
}

fn generate_codes_missing_columns() -> Result<(), Box<dyn Error>> {
    let path = format!("{}/03_codes_missing_columns.csv", OUTPUT_DIR);
    let mut wtr = Writer::from_writer(File::create(&path)?);

    wtr.write_record(["Department", "Title"])?;
    wtr.write_record(["Production", "Operator"])?;

    wtr.flush()?;
    println!("✓ 生成 03_codes_missing_columns.csv (1条，缺工号/姓名列)");
    Ok(())
}

fn generate_normal_punches() -> Result<(), Box<dyn Error>> {
    let path = format!("{}/04_punches_normal.dat", OUTPUT_DIR);
    let mut out = BufWriter::new(File::create(&path)?);
    let start = base_date()?;
    let mut lines = 0;

    for i in 0..EMPLOYEE_COUNT {
        let code = employee_code(i);
        for day in 0..DAYS {
            let date = start + Duration::days(day);
            if i % 2 == 0 {
                // 早班 08:00 → 16:30（晚退）
                writeln!(out, "{}", punch_line(code, at(date, 8, 0)?))?;
                writeln!(out, "{}", punch_line(code, at(date, 16, 30)?))?;
            } else {
                // 晚班 16:00 → 次日 00:30
                writeln!(out, "{}", punch_line(code, at(date, 16, 0)?))?;
                writeln!(out, "{}", punch_line(code, at(date + Duration::days(1), 0, 30)?))?;
            }
            lines += 2;
        }
    }

    out.flush()?;
    println!("✓ 生成 04_punches_normal.dat ({}条)", lines);
    Ok(())
}

fn generate_single_punches() -> Result<(), Box<dyn Error>> {
    let path = format!("{}/05_punches_single.dat", OUTPUT_DIR);
    let mut out = BufWriter::new(File::create(&path)?);
    let start = base_date()?;
    let mut lines = 0;

    for i in 0..10 {
        let code = employee_code(i);
        for day in 0..DAYS {
            let date = start + Duration::days(day);
            writeln!(out, "{}", punch_line(code, at(date, 8, 0)?))?;
            lines += 1;
            // 每 5 天漏打一次下班卡
            if day % 5 != 0 {
                writeln!(out, "{}", punch_line(code, at(date, 13, 0)?))?;
                lines += 1;
            }
        }
    }

    out.flush()?;
    println!("✓ 生成 05_punches_single.dat ({}条，含缺卡)", lines);
    Ok(())
}

fn generate_malformed_punches() -> Result<(), Box<dyn Error>> {
    let path = format!("{}/06_punches_malformed.dat", OUTPUT_DIR);
    let mut out = BufWriter::new(File::create(&path)?);
    let date = base_date()?;

    writeln!(out, "{}", punch_line(employee_code(0), at(date, 8, 0)?))?;
    writeln!(out, "{}", punch_line(employee_code(0), at(date, 16, 30)?))?;
    writeln!(out, "1000 2025-01-02")?; // 字段不足
    writeln!(out, "ABC 2025-01-02 08:00:00")?; // 工号非数字
    writeln!(out, "1000 2025-13-02 08:00:00")?; // 非法日期
    writeln!(out, "1000 2025-01-02 25:00:00")?; // 非法时间
    writeln!(out)?; // 空行

    out.flush()?;
    println!("✓ 生成 06_punches_malformed.dat (7行，4条坏行)");
    Ok(())
}
