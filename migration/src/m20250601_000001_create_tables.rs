use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// 自增 big integer 主键
fn id_column<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .big_integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 用户
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(id_column(Users::Id))
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::FullName).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::Status).string().not_null())
                    .col(ColumnDef::new(Users::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 能力（技能树节点）
        manager
            .create_table(
                Table::create()
                    .table(Competences::Table)
                    .if_not_exists()
                    .col(id_column(Competences::Id))
                    .col(ColumnDef::new(Competences::Code).string().not_null())
                    .col(ColumnDef::new(Competences::Name).string().not_null())
                    .col(ColumnDef::new(Competences::Description).text().null())
                    .col(
                        ColumnDef::new(Competences::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Competences::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 子能力
        manager
            .create_table(
                Table::create()
                    .table(SubCompetences::Table)
                    .if_not_exists()
                    .col(id_column(SubCompetences::Id))
                    .col(
                        ColumnDef::new(SubCompetences::CompetenceId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SubCompetences::Name).string().not_null())
                    .col(ColumnDef::new(SubCompetences::Description).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(SubCompetences::Table, SubCompetences::CompetenceId)
                            .to(Competences::Table, Competences::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 能力等级
        manager
            .create_table(
                Table::create()
                    .table(Levels::Table)
                    .if_not_exists()
                    .col(id_column(Levels::Id))
                    .col(ColumnDef::new(Levels::CompetenceId).big_integer().not_null())
                    .col(ColumnDef::new(Levels::LevelType).string().not_null())
                    .col(ColumnDef::new(Levels::Label).string().not_null())
                    .col(ColumnDef::new(Levels::Description).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Levels::Table, Levels::CompetenceId)
                            .to(Competences::Table, Competences::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 能力学习资源
        manager
            .create_table(
                Table::create()
                    .table(CompetenceResources::Table)
                    .if_not_exists()
                    .col(id_column(CompetenceResources::Id))
                    .col(
                        ColumnDef::new(CompetenceResources::CompetenceId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CompetenceResources::Title)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CompetenceResources::Url).string().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(CompetenceResources::Table, CompetenceResources::CompetenceId)
                            .to(Competences::Table, Competences::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 能力先修关系（有向边）
        manager
            .create_table(
                Table::create()
                    .table(Prerequisites::Table)
                    .if_not_exists()
                    .col(id_column(Prerequisites::Id))
                    .col(
                        ColumnDef::new(Prerequisites::SourceId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Prerequisites::TargetId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Prerequisites::PrerequisiteType)
                            .string()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Prerequisites::Table, Prerequisites::SourceId)
                            .to(Competences::Table, Competences::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Prerequisites::Table, Prerequisites::TargetId)
                            .to(Competences::Table, Competences::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 学习活动
        manager
            .create_table(
                Table::create()
                    .table(Activities::Table)
                    .if_not_exists()
                    .col(id_column(Activities::Id))
                    .col(
                        ColumnDef::new(Activities::CompetenceId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Activities::Title).string().not_null())
                    .col(ColumnDef::new(Activities::Description).text().null())
                    .col(ColumnDef::new(Activities::ActivityType).string().not_null())
                    .col(ColumnDef::new(Activities::Duration).integer().not_null())
                    .col(ColumnDef::new(Activities::Level).string().not_null())
                    .col(ColumnDef::new(Activities::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Activities::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Activities::Table, Activities::CompetenceId)
                            .to(Competences::Table, Competences::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 活动资源
        manager
            .create_table(
                Table::create()
                    .table(ActivityResources::Table)
                    .if_not_exists()
                    .col(id_column(ActivityResources::Id))
                    .col(
                        ColumnDef::new(ActivityResources::ActivityId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ActivityResources::Title).string().not_null())
                    .col(
                        ColumnDef::new(ActivityResources::ResourceType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ActivityResources::Url).string().null())
                    .col(ColumnDef::new(ActivityResources::Description).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(ActivityResources::Table, ActivityResources::ActivityId)
                            .to(Activities::Table, Activities::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 测评
        manager
            .create_table(
                Table::create()
                    .table(Evaluations::Table)
                    .if_not_exists()
                    .col(id_column(Evaluations::Id))
                    .col(
                        ColumnDef::new(Evaluations::ActivityId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Evaluations::Title).string().not_null())
                    .col(
                        ColumnDef::new(Evaluations::PrerequisiteLevel)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Evaluations::Introduction).text().null())
                    .col(ColumnDef::new(Evaluations::Status).string().not_null())
                    .col(
                        ColumnDef::new(Evaluations::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Evaluations::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Evaluations::Table, Evaluations::ActivityId)
                            .to(Activities::Table, Activities::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 测评题目，选项以 JSON 数组存储
        manager
            .create_table(
                Table::create()
                    .table(EvaluationQuestions::Table)
                    .if_not_exists()
                    .col(id_column(EvaluationQuestions::Id))
                    .col(
                        ColumnDef::new(EvaluationQuestions::EvaluationId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(EvaluationQuestions::Label).text().not_null())
                    .col(
                        ColumnDef::new(EvaluationQuestions::OptionsJson)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EvaluationQuestions::CorrectAnswer)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EvaluationQuestions::Position)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(EvaluationQuestions::Table, EvaluationQuestions::EvaluationId)
                            .to(Evaluations::Table, Evaluations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 学生作答记录（activity_id / prerequisite_level 为开始作答时的快照）
        manager
            .create_table(
                Table::create()
                    .table(StudentEvaluations::Table)
                    .if_not_exists()
                    .col(id_column(StudentEvaluations::Id))
                    .col(
                        ColumnDef::new(StudentEvaluations::EvaluationId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentEvaluations::ActivityId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentEvaluations::PrerequisiteLevel)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentEvaluations::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentEvaluations::StudentFullName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentEvaluations::StudentLevel)
                            .string()
                            .null(),
                    )
                    .col(ColumnDef::new(StudentEvaluations::Score).integer().null())
                    .col(ColumnDef::new(StudentEvaluations::Status).string().not_null())
                    .col(
                        ColumnDef::new(StudentEvaluations::StartedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentEvaluations::SubmittedAt)
                            .big_integer()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentEvaluations::Table, StudentEvaluations::EvaluationId)
                            .to(Evaluations::Table, Evaluations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentEvaluations::Table, StudentEvaluations::StudentId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 学生答案（question_id 不加外键，题目删除后详情仍可展示）
        manager
            .create_table(
                Table::create()
                    .table(StudentAnswers::Table)
                    .if_not_exists()
                    .col(id_column(StudentAnswers::Id))
                    .col(
                        ColumnDef::new(StudentAnswers::SubmissionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentAnswers::QuestionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentAnswers::ChosenAnswer)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StudentAnswers::Correct).boolean().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentAnswers::Table, StudentAnswers::SubmissionId)
                            .to(StudentEvaluations::Table, StudentEvaluations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 索引
        let indexes = [
            Index::create()
                .if_not_exists()
                .name("idx_users_role")
                .table(Users::Table)
                .col(Users::Role)
                .to_owned(),
            Index::create()
                .if_not_exists()
                .name("idx_sub_competences_competence_id")
                .table(SubCompetences::Table)
                .col(SubCompetences::CompetenceId)
                .to_owned(),
            Index::create()
                .if_not_exists()
                .name("idx_levels_competence_id")
                .table(Levels::Table)
                .col(Levels::CompetenceId)
                .to_owned(),
            Index::create()
                .if_not_exists()
                .name("idx_competence_resources_competence_id")
                .table(CompetenceResources::Table)
                .col(CompetenceResources::CompetenceId)
                .to_owned(),
            Index::create()
                .if_not_exists()
                .name("idx_activities_competence_id")
                .table(Activities::Table)
                .col(Activities::CompetenceId)
                .to_owned(),
            Index::create()
                .if_not_exists()
                .name("idx_activity_resources_activity_id")
                .table(ActivityResources::Table)
                .col(ActivityResources::ActivityId)
                .to_owned(),
            Index::create()
                .if_not_exists()
                .name("idx_evaluations_status")
                .table(Evaluations::Table)
                .col(Evaluations::Status)
                .to_owned(),
            Index::create()
                .if_not_exists()
                .name("idx_evaluation_questions_evaluation_id")
                .table(EvaluationQuestions::Table)
                .col(EvaluationQuestions::EvaluationId)
                .to_owned(),
            Index::create()
                .if_not_exists()
                .name("idx_student_evaluations_evaluation_student")
                .table(StudentEvaluations::Table)
                .col(StudentEvaluations::EvaluationId)
                .col(StudentEvaluations::StudentId)
                .to_owned(),
            Index::create()
                .if_not_exists()
                .name("idx_student_evaluations_student_id")
                .table(StudentEvaluations::Table)
                .col(StudentEvaluations::StudentId)
                .to_owned(),
            Index::create()
                .if_not_exists()
                .name("idx_student_answers_submission_id")
                .table(StudentAnswers::Table)
                .col(StudentAnswers::SubmissionId)
                .to_owned(),
        ];

        for index in indexes {
            manager.create_index(index).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按依赖的相反顺序删除
        manager
            .drop_table(Table::drop().table(StudentAnswers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentEvaluations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(EvaluationQuestions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Evaluations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ActivityResources::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Activities::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Prerequisites::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CompetenceResources::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Levels::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SubCompetences::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Competences::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Email,
    PasswordHash,
    FullName,
    Role,
    Status,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Competences {
    #[sea_orm(iden = "competences")]
    Table,
    Id,
    Code,
    Name,
    Description,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SubCompetences {
    #[sea_orm(iden = "sub_competences")]
    Table,
    Id,
    CompetenceId,
    Name,
    Description,
}

#[derive(DeriveIden)]
enum Levels {
    #[sea_orm(iden = "levels")]
    Table,
    Id,
    CompetenceId,
    LevelType,
    Label,
    Description,
}

#[derive(DeriveIden)]
enum CompetenceResources {
    #[sea_orm(iden = "competence_resources")]
    Table,
    Id,
    CompetenceId,
    Title,
    Url,
}

#[derive(DeriveIden)]
enum Prerequisites {
    #[sea_orm(iden = "prerequisites")]
    Table,
    Id,
    SourceId,
    TargetId,
    PrerequisiteType,
}

#[derive(DeriveIden)]
enum Activities {
    #[sea_orm(iden = "activities")]
    Table,
    Id,
    CompetenceId,
    Title,
    Description,
    ActivityType,
    Duration,
    Level,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ActivityResources {
    #[sea_orm(iden = "activity_resources")]
    Table,
    Id,
    ActivityId,
    Title,
    ResourceType,
    Url,
    Description,
}

#[derive(DeriveIden)]
enum Evaluations {
    #[sea_orm(iden = "evaluations")]
    Table,
    Id,
    ActivityId,
    Title,
    PrerequisiteLevel,
    Introduction,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum EvaluationQuestions {
    #[sea_orm(iden = "evaluation_questions")]
    Table,
    Id,
    EvaluationId,
    Label,
    OptionsJson,
    CorrectAnswer,
    Position,
}

#[derive(DeriveIden)]
enum StudentEvaluations {
    #[sea_orm(iden = "student_evaluations")]
    Table,
    Id,
    EvaluationId,
    ActivityId,
    PrerequisiteLevel,
    StudentId,
    StudentFullName,
    StudentLevel,
    Score,
    Status,
    StartedAt,
    SubmittedAt,
}

#[derive(DeriveIden)]
enum StudentAnswers {
    #[sea_orm(iden = "student_answers")]
    Table,
    Id,
    SubmissionId,
    QuestionId,
    ChosenAnswer,
    Correct,
}
